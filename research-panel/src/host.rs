//! Host capabilities the panel binds to.
//!
//! A browser extension provides these through its tabs, scripting and
//! storage APIs; the terminal host in [`crate::terminal`] and the fakes in
//! tests provide them otherwise.

use crate::error::HostError;
use async_trait::async_trait;

/// Fixed IDs of the panel's buttons. The notes field (`notes`) and the
/// result area (`result`) are reached through `PanelUi`.
pub mod element_ids {
    pub const SUMMARIZE_BTN: &str = "summarizeBtn";
    pub const SUGGEST_BTN: &str = "suggestBtn";
    pub const ANALYZE_BTN: &str = "analyzeBtn";
    pub const SAVE_NOTE_BTN: &str = "saveNoteBtn";
}

/// Identifier of a browser tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(pub i64);

#[async_trait]
pub trait TabHost: Send + Sync {
    /// Active tab of the current window, if any
    async fn active_tab(&self) -> Result<Option<TabId>, HostError>;

    /// Run the selection script in the tab's page context and return the
    /// string form of the current selection
    async fn selection_text(&self, tab: TabId) -> Result<Option<String>, HostError>;
}

/// Host local key/value storage with string values
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The panel document.
///
/// `notes` maps to the notes textarea, `show_result` to the `result` element.
pub trait PanelUi: Send + Sync {
    fn notes_value(&self) -> String;

    fn set_notes_value(&self, value: &str);

    /// Replace the result area's content and make it visible
    fn show_result(&self, content: &str);

    /// Blocking acknowledgment shown to the user
    fn alert(&self, message: &str);
}
