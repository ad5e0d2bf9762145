//! Work session tracking.
//!
//! One session at a time: a single record moves through start, pause/resume
//! cycles, and end. The record and its persistence live here; the CLI layer
//! enforces the transition preconditions.

pub mod duration;
pub mod record;
pub mod store;

pub use duration::format_hm;
pub use record::{SessionState, WorkRecord};
pub use store::RecordStore;
