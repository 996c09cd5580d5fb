//! Document model shared by the converter, link helpers and editor session.
//!
//! # Responsibility
//! - Define the rich-text tree (`node`) and its editor JSON codec (`wire`).
//!
//! # Invariants
//! - Leaf nodes never hold children; the type system enforces it.

pub mod node;
pub mod wire;
