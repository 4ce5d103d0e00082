use serde::{Deserialize, Serialize};

/// Signed-in user resolved from the session token for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}
