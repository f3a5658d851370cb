//! Flutter-facing FFI crate for Daymate.
//! Keep this crate a thin adapter; business rules live in `daymate_core`.

pub mod api;
