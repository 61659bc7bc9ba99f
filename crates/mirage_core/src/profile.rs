use serde::{Deserialize, Serialize};

/// Browser identity controlling GREASE insertion in the resolved plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserProfile {
    Chrome,
    Firefox,
}

impl BrowserProfile {
    /// Sniffs a user-agent string by case-insensitive substring match.
    /// Chrome wins over Firefox when both appear; anything unrecognized is
    /// treated as Chrome.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("chrome") {
            Self::Chrome
        } else if ua.contains("firefox") {
            Self::Firefox
        } else {
            Self::Chrome
        }
    }

    /// Whether this profile salts the hello with GREASE markers.
    pub fn inserts_grease(&self) -> bool {
        matches!(self, Self::Chrome)
    }
}
