//! Shared domain types and errors for the taskpad backend.

pub mod error;
pub mod types;
