//! Editor integration.
//!
//! # Responsibility
//! - Keep an editing surface and stored markdown in step without feedback
//!   loops.

pub mod session;

pub use session::{EditorSession, EditorSurface, SyncOutcome};
