//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health            service + database health
//!
//! /categories        list, create
//!
//! /todos             list (filtered, paginated), create
//! /todos/stats       aggregate counts
//! /todos/{id}        update, delete
//! ```

pub mod categories;
pub mod health;
pub mod todos;
