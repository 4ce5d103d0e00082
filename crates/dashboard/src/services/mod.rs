//! Service layer for the Quill dashboard.
//!
//! Services encapsulate business logic and coordinate
//! between handlers, database queries and the key-value store.

pub mod collab;
pub mod sidebar;
pub mod story;

pub use collab::CollabRequestService;
pub use sidebar::SidebarService;
pub use story::{PgStoryRepository, StoryRepository, StoryService};
