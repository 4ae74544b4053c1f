//! Panel controller — binds the panel document to selection, processing
//! and note persistence.
//!
//! Success text, error text and the empty-selection message all go through
//! the same result display. [`PanelOutcome`] tells callers which one it was.

use crate::error::HostError;
use crate::host::{element_ids, KeyValueStorage, PanelUi, TabHost};
use crate::notes::NotesStore;
use crate::processor::Processor;
use crate::selection;
use research_types::Operation;
use std::sync::Arc;

pub const NO_TEXT_SELECTED: &str = "No text selected";
pub const NOTE_SAVED: &str = "Note saved";

/// What a click on one of the panel buttons triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Process(Operation),
    SaveNote,
}

impl PanelAction {
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            element_ids::SUMMARIZE_BTN => Some(PanelAction::Process(Operation::Summarize)),
            element_ids::SUGGEST_BTN => Some(PanelAction::Process(Operation::Suggest)),
            element_ids::ANALYZE_BTN => Some(PanelAction::Process(Operation::Analyze)),
            element_ids::SAVE_NOTE_BTN => Some(PanelAction::SaveNote),
            _ => None,
        }
    }
}

/// Result of one processing run, already shown on the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelOutcome {
    /// Service response, line breaks replaced by markers
    Rendered(String),
    NoSelection,
    /// Request, network or host failure message
    Failed(String),
}

pub struct ResearchPanel {
    ui: Arc<dyn PanelUi>,
    tabs: Arc<dyn TabHost>,
    notes: NotesStore,
    processor: Arc<dyn Processor>,
}

impl ResearchPanel {
    pub fn new(
        ui: Arc<dyn PanelUi>,
        tabs: Arc<dyn TabHost>,
        storage: Arc<dyn KeyValueStorage>,
        processor: Arc<dyn Processor>,
    ) -> Self {
        Self {
            ui,
            tabs,
            notes: NotesStore::new(storage),
            processor,
        }
    }

    /// Restore the persisted note into the notes field, if there is one
    pub async fn initialize(&self) {
        match self.notes.load().await {
            Ok(Some(note)) => self.ui.set_notes_value(&note),
            Ok(None) => {}
            Err(e) => log::warn!("[NOTES] Failed to load research note: {}", e),
        }
    }

    /// Selection → research service → result display
    pub async fn process_text(&self, operation: Operation) -> PanelOutcome {
        let outcome = self.run(operation).await;

        match &outcome {
            PanelOutcome::Rendered(text) => self.show_result(text),
            PanelOutcome::NoSelection => self.show_result(NO_TEXT_SELECTED),
            PanelOutcome::Failed(message) => {
                log::warn!("[PANEL] {} failed: {}", operation, message);
                self.show_result(message)
            }
        }

        outcome
    }

    async fn run(&self, operation: Operation) -> PanelOutcome {
        let content = match selection::fetch_selection(self.tabs.as_ref()).await {
            Ok(Some(content)) => content,
            Ok(None) => return PanelOutcome::NoSelection,
            Err(e) => return PanelOutcome::Failed(e.to_string()),
        };

        match self.processor.process(&content, operation).await {
            Ok(text) => PanelOutcome::Rendered(text),
            Err(e) => PanelOutcome::Failed(e.to_string()),
        }
    }

    /// Persist the notes field wholesale, then acknowledge.
    /// No acknowledgment when the write fails.
    pub async fn save_note(&self) -> Result<(), HostError> {
        let notes = self.ui.notes_value();
        self.notes.save(&notes).await?;
        self.ui.alert(NOTE_SAVED);
        Ok(())
    }

    /// Dispatch a click on `element_id`. Returns false for elements the panel
    /// does not bind.
    pub async fn handle_click(&self, element_id: &str) -> bool {
        let Some(action) = PanelAction::from_element_id(element_id) else {
            return false;
        };

        match action {
            PanelAction::Process(operation) => {
                self.process_text(operation).await;
            }
            PanelAction::SaveNote => {
                if let Err(e) = self.save_note().await {
                    log::error!("[NOTES] Failed to save research note: {}", e);
                }
            }
        }

        true
    }

    fn show_result(&self, content: &str) {
        self.ui.show_result(content);
    }
}
