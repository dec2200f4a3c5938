//! Acknowledgement-only gateway.
//!
//! Stands in for real persistence: saving acknowledges the note count and
//! loading acknowledges a refresh without handing back any snapshots, so
//! the board keeps its current collection.

use crate::gateway::{GatewayResult, LoadResponse, PersistenceGateway, SaveReceipt};
use crate::model::note::NoteSnapshot;

const SAVE_ACK: &str = "All notes saved safely.";
const LOAD_ACK: &str = "Data refreshed successfully.";

/// Inert gateway matching the widget's placeholder Save/Load dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgeGateway;

impl AcknowledgeGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PersistenceGateway for AcknowledgeGateway {
    fn gateway_id(&self) -> &'static str {
        "acknowledge"
    }

    fn save(&self, notes: &[NoteSnapshot]) -> GatewayResult<SaveReceipt> {
        Ok(SaveReceipt {
            saved: notes.len(),
            message: SAVE_ACK.to_string(),
        })
    }

    fn load(&self) -> GatewayResult<LoadResponse> {
        Ok(LoadResponse {
            notes: None,
            message: LOAD_ACK.to_string(),
        })
    }
}
