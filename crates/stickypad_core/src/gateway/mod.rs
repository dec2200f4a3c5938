//! Persistence gateway seam.
//!
//! # Responsibility
//! - Define the external collaborator contract for Save/Load actions.
//! - Keep the core free of any real storage or I/O concern.
//!
//! # Invariants
//! - The core calls a gateway but never implements real persistence.
//! - Gateways exchange committed-state snapshots only, never live notes.

use crate::model::note::NoteSnapshot;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod acknowledge;

pub use acknowledge::AcknowledgeGateway;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Gateway-layer failures surfaced to the host as messages, never panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backing side of the gateway cannot be reached.
    Unavailable(String),
    /// The gateway produced snapshots the board cannot accept.
    InvalidSnapshot(String),
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "gateway unavailable: {message}"),
            Self::InvalidSnapshot(message) => {
                write!(f, "gateway returned invalid snapshot data: {message}")
            }
        }
    }
}

impl Error for GatewayError {}

/// Acknowledgement returned by a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    /// Number of snapshots the gateway accepted.
    pub saved: usize,
    /// User-facing acknowledgement text.
    pub message: String,
}

/// Result of a load request.
///
/// `notes: None` means the gateway has nothing to hand back and the board
/// keeps its current collection; `Some` replaces the collection wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResponse {
    pub notes: Option<Vec<NoteSnapshot>>,
    /// User-facing acknowledgement text.
    pub message: String,
}

/// External collaborator for the board's Save/Load actions.
///
/// The board owns when to call; the gateway owns what saving and loading
/// mean. The shipped implementation is acknowledgement-only.
pub trait PersistenceGateway {
    /// Stable identifier for diagnostics.
    fn gateway_id(&self) -> &'static str;

    /// Hands the current board snapshots to the gateway.
    fn save(&self, notes: &[NoteSnapshot]) -> GatewayResult<SaveReceipt>;

    /// Asks the gateway for replacement snapshots.
    fn load(&self) -> GatewayResult<LoadResponse>;
}
