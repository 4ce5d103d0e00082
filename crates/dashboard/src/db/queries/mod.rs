//! Database queries for the Quill dashboard.
//!
//! This module contains database query functions organized by domain.

pub mod session;
pub mod story;
