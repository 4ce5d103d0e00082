//! Dashboard sidebar structure.
//!
//! The sidebar has three logical sections: the user's stories (only when
//! there are any), the static overview links, and the collaboration request
//! indicator. A profile footer closes it.

use serde::Serialize;
use uuid::Uuid;

use crate::auth::Session;
use crate::db::models::Story;

/// Where the collaboration request indicator links to.
pub const COLLAB_REQUESTS_HREF: &str = "/dashboard/requests";

/// Icon shown next to a sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    UserPlus,
    NotebookPen,
}

/// A static navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarOption {
    pub id: u32,
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

/// The overview links, in display order.
pub const OVERVIEW_OPTIONS: [SidebarOption; 2] = [
    SidebarOption {
        id: 1,
        name: "Add a new collaborator",
        href: "/dashboard/add/collaborator",
        icon: Icon::UserPlus,
    },
    SidebarOption {
        id: 2,
        name: "Add a new story",
        href: "/dashboard/add/story",
        icon: Icon::NotebookPen,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryLink {
    pub id: Uuid,
    pub title: String,
    pub href: String,
}

impl From<&Story> for StoryLink {
    fn from(story: &Story) -> Self {
        Self {
            id: story.id,
            title: story.title.clone(),
            href: format!("/dashboard/stories/{}", story.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoriesSection {
    pub heading: &'static str,
    pub items: Vec<StoryLink>,
}

/// Collaboration request indicator. The count is the value at render time;
/// clients refresh it through the count endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollabRequestIndicator {
    pub session_id: String,
    pub href: &'static str,
    pub initial_unseen_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub stories: Option<StoriesSection>,
    pub overview: Vec<SidebarOption>,
    pub collab_requests: CollabRequestIndicator,
    pub profile: Profile,
}

impl Sidebar {
    /// Compose the sidebar for `session`. The stories section is present
    /// exactly when `stories` is non-empty.
    pub fn build(session: &Session, stories: &[Story], unseen_count: usize) -> Self {
        let stories = (!stories.is_empty()).then(|| StoriesSection {
            heading: "Your stories",
            items: stories.iter().map(StoryLink::from).collect(),
        });

        Self {
            stories,
            overview: OVERVIEW_OPTIONS.to_vec(),
            collab_requests: CollabRequestIndicator {
                session_id: session.user_id.clone(),
                href: COLLAB_REQUESTS_HREF,
                initial_unseen_count: unseen_count,
            },
            profile: Profile {
                name: session.name.clone().unwrap_or_default(),
                email: session.email.clone().unwrap_or_default(),
                image_url: session.image_url.clone().unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{session, story};

    #[test]
    fn test_no_stories_section_when_empty() {
        let sidebar = Sidebar::build(&session("u1"), &[], 0);
        assert!(sidebar.stories.is_none());
        assert_eq!(sidebar.overview.len(), 2);
    }

    #[test]
    fn test_stories_section_in_order() {
        let stories = vec![story("Alpha"), story("Beta")];
        let sidebar = Sidebar::build(&session("u1"), &stories, 0);

        let section = sidebar.stories.expect("stories section");
        assert_eq!(section.heading, "Your stories");
        let titles: Vec<&str> = section.items.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
        assert_eq!(
            section.items[0].href,
            format!("/dashboard/stories/{}", stories[0].id)
        );
    }

    #[test]
    fn test_collab_indicator_and_profile() {
        let mut user = session("u1");
        user.image_url = None;
        let sidebar = Sidebar::build(&user, &[], 3);

        assert_eq!(sidebar.collab_requests.initial_unseen_count, 3);
        assert_eq!(sidebar.collab_requests.session_id, "u1");
        assert_eq!(sidebar.collab_requests.href, "/dashboard/requests");
        assert_eq!(sidebar.profile.image_url, "");
        assert_eq!(sidebar.profile.email, "u1@example.com");
    }

    #[test]
    fn test_profile_without_name_or_email() {
        let mut user = session("u1");
        user.name = None;
        user.email = None;
        let sidebar = Sidebar::build(&user, &[], 0);

        assert_eq!(sidebar.profile.name, "");
        assert_eq!(sidebar.profile.email, "");
    }

    #[test]
    fn test_overview_links() {
        let sidebar = Sidebar::build(&session("u1"), &[], 0);
        assert_eq!(sidebar.overview[0].href, "/dashboard/add/collaborator");
        assert_eq!(sidebar.overview[0].icon, Icon::UserPlus);
        assert_eq!(sidebar.overview[1].href, "/dashboard/add/story");
        assert_eq!(sidebar.overview[1].icon, Icon::NotebookPen);
    }
}
