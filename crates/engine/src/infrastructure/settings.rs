//! Adapter settings loaded from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `CALGRID_LOCALE` | Locale code used for formatting | `en-US` |
//! | `CALGRID_FORMATS` | JSON object of format overrides keyed by format name | none |

use calgrid_domain::FormatOverrides;

use crate::infrastructure::error::AdapterError;

pub const DEFAULT_LOCALE: &str = "en-US";

const LOCALE_VAR: &str = "CALGRID_LOCALE";
const FORMATS_VAR: &str = "CALGRID_FORMATS";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdapterSettings {
    /// Locale code; `None` means `DEFAULT_LOCALE`.
    pub locale: Option<String>,
    /// Replacements for entries of the default format table.
    pub formats: FormatOverrides,
}

impl AdapterSettings {
    pub fn new(locale: Option<String>, formats: FormatOverrides) -> Self {
        Self { locale, formats }
    }

    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AdapterError::Settings` if `CALGRID_FORMATS` is not a JSON
    /// object of known format keys.
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdapterError> {
        let locale = lookup(LOCALE_VAR)
            .map(|locale| locale.trim().to_string())
            .filter(|locale| !locale.is_empty());

        let formats = match lookup(FORMATS_VAR) {
            Some(json) if !json.trim().is_empty() => serde_json::from_str(&json)
                .map_err(|e| AdapterError::settings(format!("{} is invalid: {}", FORMATS_VAR, e)))?,
            _ => FormatOverrides::default(),
        };

        Ok(Self { locale, formats })
    }

    /// The configured locale, or `DEFAULT_LOCALE`.
    pub fn locale_or_default(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}
