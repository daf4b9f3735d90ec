//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `taskpad_db` and
//! map errors via [`crate::error::AppError`].

pub mod categories;
pub mod health;
pub mod todos;
