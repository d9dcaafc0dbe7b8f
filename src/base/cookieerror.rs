use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Validation Errors
    #[error("`expires` should be > 0 for non-session cookie '{name}'")]
    NonPositiveExpiry { name: String },
    #[error("session cookie '{name}' can not have an `expires` value")]
    SessionCookieWithExpiry { name: String },

    // Formatting Errors
    #[error("Failed to format cookie date: {0}")]
    DateFormat(String),

    // Document Errors
    #[error("Invalid <base> href '{href}': {reason}")]
    InvalidBaseHref { href: String, reason: String },
}

impl CookieError {
    /// Create a non-positive expiry error.
    pub fn non_positive_expiry(name: impl Into<String>) -> Self {
        CookieError::NonPositiveExpiry { name: name.into() }
    }

    /// Create a session-cookie-with-expiry error.
    pub fn session_cookie_with_expiry(name: impl Into<String>) -> Self {
        CookieError::SessionCookieWithExpiry { name: name.into() }
    }

    /// Create an invalid base href error.
    pub fn invalid_base_href(href: impl Into<String>, reason: impl ToString) -> Self {
        CookieError::InvalidBaseHref {
            href: href.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error was raised by option validation before any write.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CookieError::NonPositiveExpiry { .. } | CookieError::SessionCookieWithExpiry { .. }
        )
    }
}

impl From<time::error::Format> for CookieError {
    fn from(err: time::error::Format) -> Self {
        CookieError::DateFormat(err.to_string())
    }
}
