//! Incremental validation of a player's point selections.
//!
//! A [`Board`] consumes point ids one at a time and decides, per step,
//! whether the selection still fits some incomplete polygon and whether it
//! now completes one.

mod board;
mod config;
pub mod matching;
mod outcome;
mod session;
mod status;

pub use board::Board;
pub use config::{CompletionCheck, CompletionPolicy, SelectionConfig};
pub use outcome::{Completion, PointRelease, SelectionOutcome};
pub use status::PointState;
