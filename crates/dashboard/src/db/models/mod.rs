//! Database models for the Quill dashboard.
//!
//! This module contains SQLx-compatible model definitions
//! for the tables the dashboard reads.

pub mod session;
pub mod story;

pub use session::*;
pub use story::*;
