//! The document the default cookie reader and writer bind to.
//!
//! A [`Document`] stands in for the browser's `document`: it has a URL, an
//! optional `<base href>`, and a `document.cookie` backed by a
//! [`CookieJar`] that documents of the same site can share.
//!
//! ```rust
//! use cookieaccess::document::Document;
//! use url::Url;
//!
//! let html = r#"<html><head><base href="/app/"></head></html>"#;
//! let doc = Document::from_html(Url::parse("https://example.com/app/page").unwrap(), html);
//! assert_eq!(doc.html_base_path().as_deref(), Some("/app/"));
//! ```

use crate::base::context::UrlResultExt;
use crate::base::cookieerror::CookieError;
use crate::cookies::jar::CookieJar;
use crate::cookies::readwrite::{CookieReader, CookieWriter};
use std::sync::Arc;
use url::Url;

pub struct Document {
    url: Url,
    base_href: Option<String>,
    cookie_jar: Arc<CookieJar>,
}

impl Document {
    /// A document at `url` with no `<base>` element and an empty jar.
    pub fn new(url: Url) -> Self {
        Self {
            url,
            base_href: None,
            cookie_jar: Arc::new(CookieJar::new()),
        }
    }

    /// A document at `url` whose `<base href>` is taken from `html`.
    pub fn from_html(url: Url, html: &str) -> Self {
        let base_href = find_base_href(html);
        Self {
            base_href,
            ..Self::new(url)
        }
    }

    /// Set the raw `href` attribute of the document's `<base>` element.
    pub fn with_base_href(mut self, href: impl Into<String>) -> Self {
        self.base_href = Some(href.into());
        self
    }

    /// Share `jar` with other documents.
    pub fn with_jar(mut self, jar: Arc<CookieJar>) -> Self {
        self.cookie_jar = jar;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn cookie_jar(&self) -> &Arc<CookieJar> {
        &self.cookie_jar
    }

    /// The `<base href>` resolved against the document URL, if there is one.
    pub fn base_url(&self) -> Result<Option<Url>, CookieError> {
        match &self.base_href {
            Some(href) => self.url.join(href).base_href_context(href).map(Some),
            None => Ok(None),
        }
    }

    /// Path component of the `<base href>` URL, or `None` without a usable `<base>`.
    pub fn html_base_path(&self) -> Option<String> {
        match self.base_url() {
            Ok(base) => base.map(|url| url.path().to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring invalid <base> href");
                None
            }
        }
    }
}

impl CookieReader for Document {
    fn read(&self) -> String {
        self.cookie_jar.cookie_string_for(&self.url)
    }
}

impl CookieWriter for Document {
    fn write(&self, cookie: &str) -> String {
        self.cookie_jar.set_from_document(&self.url, cookie);
        cookie.to_string()
    }
}

/// `href` of the first `<base>` tag in `html`, if it has one.
fn find_base_href(html: &str) -> Option<String> {
    let lower = html.to_ascii_lowercase();
    let mut from = 0;

    while let Some(found) = lower[from..].find("<base") {
        let start = from + found + "<base".len();
        from = start;

        // `<basefont>` and friends are not `<base>`.
        match lower[start..].chars().next() {
            Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/' => {}
            _ => continue,
        }

        let end = lower[start..].find('>').map_or(lower.len(), |i| start + i);
        return attribute_value(&html[start..end], &lower[start..end], "href");
    }

    None
}

/// Value of attribute `name` in a tag body; `lower` is `tag` lowercased.
fn attribute_value(tag: &str, lower: &str, name: &str) -> Option<String> {
    let bytes = lower.as_bytes();
    let mut from = 0;

    while let Some(found) = lower[from..].find(name) {
        let at = from + found;
        from = at + name.len();

        let preceded_by_space = at == 0 || bytes[at - 1].is_ascii_whitespace();
        if !preceded_by_space {
            continue;
        }

        let rest = lower[from..].trim_start();
        let Some(after_eq) = rest.strip_prefix('=') else {
            continue;
        };
        let value_start = lower.len() - after_eq.trim_start().len();
        let value = &tag[value_start..];

        let value = match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..].split(quote).next().unwrap_or_default(),
            _ => value
                .split(|c: char| c.is_ascii_whitespace())
                .next()
                .unwrap_or_default(),
        };
        return Some(value.trim().to_string());
    }

    None
}
