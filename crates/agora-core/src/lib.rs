//! # Agora Core
//!
//! Core types for the Agora debate pipeline:
//! - [`PhilosopherProfile`] / [`PhilosopherSet`] — generated debate personas
//! - [`EvidenceItem`] / [`SourcedPhilosopher`] — retrieved supporting material
//! - [`DebateTurn`] / [`DebateSession`] — per-request debate state
//! - [`decode::from_relaxed_json`] — tolerant decoding of model replies

pub mod decode;
pub mod evidence;
pub mod profile;
pub mod session;
pub mod turn;

pub use decode::{from_relaxed_json, DecodeError};
pub use evidence::{EvidenceItem, PageSummary, SearchResult, SourcedPhilosopher};
pub use profile::{PhilosopherProfile, PhilosopherSet};
pub use session::DebateSession;
pub use turn::DebateTurn;
