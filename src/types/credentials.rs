use crate::error::ExplorerError;
use std::fmt;
use url::Url;

pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

const ACCEPTED_KEY_PREFIXES: [&str; 2] = ["sk_", "rk_"];

/// Provider secret key plus warehouse connection string.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub secret_key: String,
    pub database_url: String,
}

impl Credentials {
    /// Trim both fields and reject empty ones.
    pub fn new(
        secret_key: impl AsRef<str>,
        database_url: impl AsRef<str>,
    ) -> Result<Self, ExplorerError> {
        let secret_key = secret_key.as_ref().trim().to_string();
        let database_url = database_url.as_ref().trim().to_string();
        if secret_key.is_empty() {
            return Err(ExplorerError::Config(format!("{SECRET_KEY_VAR} is empty")));
        }
        if database_url.is_empty() {
            return Err(ExplorerError::Config(format!("{DATABASE_URL_VAR} is empty")));
        }
        Ok(Self {
            secret_key,
            database_url,
        })
    }

    pub fn has_accepted_prefix(key: &str) -> bool {
        ACCEPTED_KEY_PREFIXES.iter().any(|p| key.starts_with(p))
    }

    /// Required before credentials are written to disk.
    pub fn validate_for_persist(&self) -> Result<(), ExplorerError> {
        if !Self::has_accepted_prefix(&self.secret_key) {
            return Err(ExplorerError::Config(
                "Stripe key must start with 'sk_' or 'rk_'".to_string(),
            ));
        }
        if self.secret_key.contains('\n') || self.database_url.contains('\n') {
            return Err(ExplorerError::Config(
                "credentials must not contain line breaks".to_string(),
            ));
        }
        Ok(())
    }

    /// First twelve characters of the key, for log lines.
    pub fn key_hint(&self) -> String {
        let visible: String = self.secret_key.chars().take(12).collect();
        format!("{visible}...")
    }

    /// Database URL with any password replaced.
    pub fn redacted_database_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) if url.password().is_some() => {
                let _ = url.set_password(Some("****"));
                url.to_string()
            }
            Ok(url) => url.to_string(),
            Err(_) => "<unparseable url>".to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret_key", &self.key_hint())
            .field("database_url", &self.redacted_database_url())
            .finish()
    }
}
