//! User profile domain model.

use serde::{Deserialize, Serialize};

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// Per-installation user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications_enabled: bool,
    pub theme: Theme,
    /// BCP 47-ish language tag, e.g. `en`.
    pub language: String,
}

/// Single user profile; one instance per installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub preferences: Preferences,
}

impl UserProfile {
    /// Flips the notification preference. No other field is touched.
    pub fn toggle_notifications(&mut self) {
        self.preferences.notifications_enabled = !self.preferences.notifications_enabled;
    }
}
