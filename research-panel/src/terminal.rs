//! Terminal host — runs the panel headless.
//!
//! The "active tab" is a fixed piece of text handed in by the caller, the
//! result area is stdout and alerts go to stderr.

use crate::error::HostError;
use crate::host::{PanelUi, TabHost, TabId};
use async_trait::async_trait;
use std::sync::Mutex;

/// Tab host whose only tab has a fixed selection
pub struct FixedSelection {
    text: Option<String>,
}

impl FixedSelection {
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }
}

#[async_trait]
impl TabHost for FixedSelection {
    async fn active_tab(&self) -> Result<Option<TabId>, HostError> {
        Ok(Some(TabId(0)))
    }

    async fn selection_text(&self, _tab: TabId) -> Result<Option<String>, HostError> {
        Ok(self.text.clone())
    }
}

#[derive(Default)]
pub struct TerminalUi {
    notes: Mutex<String>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PanelUi for TerminalUi {
    fn notes_value(&self) -> String {
        self.notes
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    fn set_notes_value(&self, value: &str) {
        if let Ok(mut notes) = self.notes.lock() {
            *notes = value.to_string();
        }
    }

    fn show_result(&self, content: &str) {
        println!("{}", content);
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}
