//! User settings for refinement credentials

use serde::{Deserialize, Serialize};

/// Provider preselected for new users
pub const DEFAULT_PROVIDER: &str = "gemini";
/// Model preselected for new users
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Provider/model/key preferences, persisted in local storage
///
/// `api_key` is only ever transmitted when `use_custom_key` is set;
/// otherwise the backend's own credentials apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub api_key: String,
    pub provider: String,
    pub model: String,
    pub use_custom_key: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider: DEFAULT_PROVIDER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            use_custom_key: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.provider, "gemini");
        assert_eq!(settings.model, "gemini-2.5-flash");
        assert_eq!(settings.api_key, "");
        assert!(!settings.use_custom_key);
    }
}
