//! Research panel — selection → research service → result display, plus a
//! single persisted research note.
//!
//! Host capabilities (tabs, in-page script execution, local storage and the
//! panel document) are traits in [`host`]; [`ResearchPanel`] only talks to
//! them through injected references.

pub mod config;
pub mod error;
pub mod host;
pub mod notes;
pub mod panel;
pub mod processor;
pub mod selection;
pub mod storage;
pub mod terminal;

pub use config::PanelConfig;
pub use error::{HostError, ProcessError};
pub use panel::{PanelAction, PanelOutcome, ResearchPanel};
pub use processor::{Processor, ResearchClient};
pub use research_types::Operation;
