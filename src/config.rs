//! Runtime settings
//!
//! Loaded once at process start and injected into the components that
//! need them; there is no ambient global configuration state.

use secrecy::SecretString;

/// Display name reported by the health endpoint
pub const APP_NAME: &str = "ABZ Agent API";

/// Process-wide settings.
///
/// The credential is optional at load time; absence is only detected
/// when the agent is first constructed.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Application display name
    pub app_name: String,
    /// Deployment tag, lowercased. "prod" selects restrictive CORS.
    pub env: String,
    /// Google AI Studio API key
    pub gemini_api_key: Option<SecretString>,
}

impl Settings {
    /// Read settings from the environment, honoring a `.env` file.
    ///
    /// Performs no validation; an empty credential counts as absent.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = std::env::var("ENV")
            .unwrap_or_else(|_| "local".to_string())
            .to_lowercase();
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(SecretString::from);

        Settings {
            app_name: APP_NAME.to_string(),
            env,
            gemini_api_key,
        }
    }

    /// Whether the restrictive production CORS policy applies
    pub fn is_production(&self) -> bool {
        self.env == "prod"
    }

    /// Whether a model credential is configured
    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
