//! HTTP handlers for the Quill dashboard.
//!
//! This module contains all route handlers organized by domain.

pub mod dashboard;
pub mod health;
pub mod pages;

pub use health::{api_health, health_check};
