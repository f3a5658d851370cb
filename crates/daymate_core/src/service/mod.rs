//! Use-case services over the collection store.
//!
//! Each service owns one screen-facing flow: load with first-run seeding,
//! plus the mutations that flow writes back through the store.

pub mod calendar_service;
pub mod chat_service;
pub mod profile_service;
pub mod reminder_service;
pub mod task_service;
