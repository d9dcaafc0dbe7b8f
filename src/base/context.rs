//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting URL parse errors into context-rich `CookieError` variants.

use crate::base::cookieerror::CookieError;

/// Extension trait for adding context to URL parse Results.
pub trait UrlResultExt<T> {
    /// Add `<base href>` context to a URL parse error.
    ///
    /// # Example
    /// ```ignore
    /// use cookieaccess::base::context::UrlResultExt;
    ///
    /// let base = document_url.join(href).base_href_context(href)?;
    /// // Error: "Invalid <base> href 'http://[::1': invalid IPv6 address"
    /// ```
    fn base_href_context(self, href: &str) -> Result<T, CookieError>;
}

impl<T> UrlResultExt<T> for Result<T, url::ParseError> {
    fn base_href_context(self, href: &str) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::invalid_base_href(href, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn test_base_href_context() {
        let err = Url::parse("http://[::1").base_href_context("http://[::1").unwrap_err();

        match err {
            CookieError::InvalidBaseHref { href, reason } => {
                assert_eq!(href, "http://[::1");
                assert!(!reason.is_empty());
            }
            _ => panic!("Expected InvalidBaseHref"),
        }
    }

    #[test]
    fn test_ok_passes_through() {
        let url = Url::parse("https://example.com/app/")
            .base_href_context("https://example.com/app/")
            .unwrap();
        assert_eq!(url.path(), "/app/");
    }
}
