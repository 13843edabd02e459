//! The signed-in user's profile.

use serde::Deserialize;

/// The profile returned by the user endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    /// The account's unique username.
    pub username: String,
    /// The user's given name, empty when not set.
    #[serde(default)]
    pub first_name: String,
    /// Nested profile details.
    #[serde(default)]
    pub profile: Option<ProfileDetails>,
}

/// Extra profile fields nested under the user record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileDetails {
    /// A URL to the user's avatar image.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// The name to greet the user with: the first name when set, otherwise
    /// the username.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }

    /// The avatar URL, when one is set.
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|details| details.avatar_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::UserProfile;

    #[test]
    fn display_name_prefers_first_name() {
        let user: UserProfile = serde_json::from_value(json!({
            "username": "asmith",
            "first_name": "Alex",
            "profile": {"avatar_url": "https://example.com/a.png"}
        }))
        .unwrap();

        assert_eq!(user.display_name(), "Alex");
        assert_eq!(user.avatar_url(), Some("https://example.com/a.png"));
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let user: UserProfile = serde_json::from_value(json!({"username": "asmith"})).unwrap();

        assert_eq!(user.display_name(), "asmith");
        assert_eq!(user.avatar_url(), None);
    }
}
