use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by `GET /api/user/profile`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
