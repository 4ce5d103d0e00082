//! HTML rendering of the dashboard pages.
//!
//! Templates are compiled into the binary and loaded once at startup.

use minijinja::{context, Environment};

use crate::error::AppResult;
use crate::sidebar::Sidebar;

const TEMPLATES: [(&str, &str); 5] = [
    ("base.html", include_str!("templates/base.html")),
    ("home.html", include_str!("templates/home.html")),
    (
        "dashboard_layout.html",
        include_str!("templates/dashboard_layout.html"),
    ),
    ("dashboard.html", include_str!("templates/dashboard.html")),
    ("add_novelist.html", include_str!("templates/add_novelist.html")),
];

/// Pages rendered inside the dashboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPage {
    Home,
    AddNovelist,
}

impl DashboardPage {
    fn template(self) -> &'static str {
        match self {
            DashboardPage::Home => "dashboard.html",
            DashboardPage::AddNovelist => "add_novelist.html",
        }
    }
}

/// Compiled page templates.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compile all page templates.
    pub fn new() -> AppResult<Self> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Landing page.
    pub fn render_home(&self) -> AppResult<String> {
        let html = self
            .env
            .get_template("home.html")?
            .render(context! { greeting => "hello" })?;
        Ok(html)
    }

    /// A dashboard page with its sidebar.
    pub fn render_dashboard(
        &self,
        page: DashboardPage,
        sidebar: &Sidebar,
    ) -> AppResult<String> {
        let html = self
            .env
            .get_template(page.template())?
            .render(context! { sidebar => sidebar })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{session, story};

    #[test]
    fn test_home() {
        let html = Views::new().unwrap().render_home().unwrap();
        assert!(html.contains("<button type=\"button\">hello</button>"));
    }

    #[test]
    fn test_dashboard_without_stories() {
        let views = Views::new().unwrap();
        let sidebar = Sidebar::build(&session("u1"), &[], 0);
        let html = views.render_dashboard(DashboardPage::Home, &sidebar).unwrap();

        assert!(!html.contains("Your stories"));
        assert!(html.contains("Add a new collaborator"));
        assert!(html.contains("Add a new story"));
        assert!(html.contains("u1@example.com"));
        assert!(!html.contains("class=\"badge\""));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_dashboard_with_stories_and_requests() {
        let views = Views::new().unwrap();
        let sidebar = Sidebar::build(&session("u1"), &[story("Ember & Ash")], 2);
        let html = views.render_dashboard(DashboardPage::Home, &sidebar).unwrap();

        assert!(html.contains("Your stories"));
        assert!(html.contains("Ember &amp; Ash"));
        assert!(html.contains("<span class=\"badge\">2</span>"));
    }

    #[test]
    fn test_add_novelist_page() {
        let views = Views::new().unwrap();
        let sidebar = Sidebar::build(&session("u1"), &[], 0);
        let html = views
            .render_dashboard(DashboardPage::AddNovelist, &sidebar)
            .unwrap();
        assert!(html.contains("<h1>Add a novelist</h1>"));
        assert!(html.contains("Overview"));
    }
}
