//! Domain entities persisted by the assistant core.
//!
//! # Responsibility
//! - Define the canonical records for each stored collection.
//! - Keep wire naming aligned with the persisted JSON layout (camelCase).
//!
//! # Invariants
//! - Every entity carries an opaque `String` id.
//! - Optional fields are omitted from the serialized form when absent.

pub mod chat;
pub mod event;
pub mod profile;
pub mod reminder;
pub mod stats;
pub mod task;
