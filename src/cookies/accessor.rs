//! Named-cookie operations over an injected [`CookieReader`] / [`CookieWriter`].
//!
//! Every function is a single read, transform and optional write. Missing
//! cookies yield `""` or an empty list, never an error; only
//! [`set_cookie_with_options`] validates its input.

use crate::base::cookieerror::CookieError;
use crate::cookies::httpdate::{self, BEGIN_OF_TIME};
use crate::cookies::options::CookieOptions;
use crate::cookies::readwrite::{CookieReader, CookieWriter};
use crate::document::Document;
use percent_encoding::percent_decode_str;
use std::fmt::Display;
use time::OffsetDateTime;

/// Write `name=value` expiring `ttl_days` days from now on path `/`.
///
/// The value is written as-is, without encoding. Returns what the writer
/// returned.
pub fn set_cookie<W>(
    name: &str,
    value: impl Display,
    ttl_days: i64,
    writer: &W,
) -> Result<String, CookieError>
where
    W: CookieWriter + ?Sized,
{
    let expires_at = httpdate::expires_after_days(OffsetDateTime::now_utc(), ttl_days);
    let cookie = format!(
        "{}={}; expires={}; path=/",
        name,
        value,
        httpdate::format_cookie_date(expires_at)?
    );

    tracing::debug!(name = %name, ttl_days, "setting cookie");
    Ok(writer.write(&cookie))
}

/// Validate `options` and write the resulting cookie line.
pub fn set_cookie_with_options<W>(options: &CookieOptions, writer: &W) -> Result<(), CookieError>
where
    W: CookieWriter + ?Sized,
{
    let cookie = options.to_cookie_string(OffsetDateTime::now_utc())?;

    tracing::debug!(
        name = %options.name,
        path = %options.path,
        session = options.session_cookie,
        "setting cookie with options"
    );
    writer.write(&cookie);
    Ok(())
}

/// Expire cookie `name`, trying the paths browsers are known to disagree on.
///
/// Always writes an expired cookie on `/`. While the cookie is still readable
/// it then retries without a path (Firefox), on `base_path` without a
/// trailing slash, and on `base_path` with one (Edge). `base_path` of `None`
/// means `/`. Best effort: success is not guaranteed.
pub fn remove_cookie<R, W>(name: &str, reader: &R, writer: &W, base_path: Option<&str>)
where
    R: CookieReader + ?Sized,
    W: CookieWriter + ?Sized,
{
    let base_path = base_path.unwrap_or("/");

    writer.write(&format!("{name}=;expires={BEGIN_OF_TIME};path=/"));

    if check_cookie(name, reader) {
        tracing::debug!(name = %name, "cookie survived removal on /, retrying without path");
        writer.write(&format!("{name}=;expires={BEGIN_OF_TIME}"));
    }

    if check_cookie(name, reader) && base_path != "/" {
        let public_path = base_path.strip_suffix('/').unwrap_or(base_path);
        tracing::debug!(name = %name, path = %public_path, "retrying cookie removal on base path");
        writer.write(&format!("{name}=;expires={BEGIN_OF_TIME};path={public_path}"));
    }

    if check_cookie(name, reader) && base_path != "/" {
        let public_path = if base_path.ends_with('/') {
            base_path.to_string()
        } else {
            format!("{base_path}/")
        };
        tracing::debug!(name = %name, path = %public_path, "retrying cookie removal on base path with trailing slash");
        writer.write(&format!("{name}=;expires={BEGIN_OF_TIME};path={public_path}"));
    }
}

/// Value of the first cookie whose segment contains `name=`, or `""`.
///
/// The whole cookie string is percent-decoded before it is split on `;`, so a
/// value containing an encoded `;` splits into two segments.
pub fn get_first_cookie<R>(name: &str, reader: &R) -> String
where
    R: CookieReader + ?Sized,
{
    let cookies = reader.read();
    if cookies.is_empty() {
        return String::new();
    }

    let needle = format!("{name}=");
    let decoded = percent_decode_str(&cookies).decode_utf8_lossy();

    decoded
        .split(';')
        .find(|segment| segment.contains(&needle))
        .map(|segment| {
            segment
                .trim_start()
                .chars()
                .skip(needle.chars().count())
                .collect()
        })
        .unwrap_or_default()
}

/// Alias of [`get_first_cookie`].
pub fn get_cookie<R>(name: &str, reader: &R) -> String
where
    R: CookieReader + ?Sized,
{
    get_first_cookie(name, reader)
}

/// Names of all cookies in jar order.
pub fn get_cookie_names<R>(reader: &R) -> Vec<String>
where
    R: CookieReader + ?Sized,
{
    reader
        .read()
        .split(';')
        .map(|segment| segment.split('=').next().unwrap_or_default().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether cookie `name` has a non-empty value.
pub fn check_cookie<R>(name: &str, reader: &R) -> bool
where
    R: CookieReader + ?Sized,
{
    !get_first_cookie(name, reader).is_empty()
}

/// Bundles a reader, a writer and a `<base>` path so callers don't pass them
/// on every call.
///
/// ```rust
/// use cookieaccess::cookies::accessor::CookieAccessor;
/// use cookieaccess::document::Document;
/// use url::Url;
///
/// let doc = Document::new(Url::parse("https://example.com/").unwrap());
/// let cookies = CookieAccessor::for_document(&doc);
///
/// cookies.set_cookie("lang", "de", 30).unwrap();
/// assert_eq!(cookies.get_first_cookie("lang"), "de");
///
/// cookies.remove_cookie("lang");
/// assert!(!cookies.check_cookie("lang"));
/// ```
pub struct CookieAccessor<'a, R: ?Sized, W: ?Sized> {
    reader: &'a R,
    writer: &'a W,
    base_path: Option<String>,
}

impl<'a> CookieAccessor<'a, Document, Document> {
    /// Read and write through `document.cookie` of `document`, removing on its
    /// `<base>` path.
    pub fn for_document(document: &'a Document) -> Self {
        Self {
            reader: document,
            writer: document,
            base_path: document.html_base_path(),
        }
    }
}

impl<'a, R, W> CookieAccessor<'a, R, W>
where
    R: CookieReader + ?Sized,
    W: CookieWriter + ?Sized,
{
    pub fn new(reader: &'a R, writer: &'a W) -> Self {
        Self {
            reader,
            writer,
            base_path: None,
        }
    }

    /// Set the path `remove_cookie` falls back to.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn set_cookie(
        &self,
        name: &str,
        value: impl Display,
        ttl_days: i64,
    ) -> Result<String, CookieError> {
        set_cookie(name, value, ttl_days, self.writer)
    }

    pub fn set_cookie_with_options(&self, options: &CookieOptions) -> Result<(), CookieError> {
        set_cookie_with_options(options, self.writer)
    }

    pub fn remove_cookie(&self, name: &str) {
        remove_cookie(name, self.reader, self.writer, self.base_path.as_deref())
    }

    pub fn get_first_cookie(&self, name: &str) -> String {
        get_first_cookie(name, self.reader)
    }

    pub fn get_cookie(&self, name: &str) -> String {
        get_cookie(name, self.reader)
    }

    pub fn get_cookie_names(&self) -> Vec<String> {
        get_cookie_names(self.reader)
    }

    pub fn check_cookie(&self, name: &str) -> bool {
        check_cookie(name, self.reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookies::options::Expires;
    use std::cell::RefCell;

    fn recording_writer(written: &RefCell<Vec<String>>) -> impl Fn(&str) -> String + '_ {
        move |cookie: &str| {
            written.borrow_mut().push(cookie.to_string());
            cookie.to_string()
        }
    }

    #[test]
    fn test_set_cookie_format() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);

        let cookie = set_cookie("user", 42, 7, &writer).unwrap();
        assert!(cookie.starts_with("user=42; expires="));
        assert!(cookie.ends_with(" GMT; path=/"));
        assert_eq!(written.borrow().as_slice(), [cookie]);
    }

    #[test]
    fn test_set_cookie_with_options_writes_once() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);

        let options = CookieOptions::new("sid", "a&b").session_cookie(true);
        set_cookie_with_options(&options, &writer).unwrap();

        assert_eq!(
            written.borrow().as_slice(),
            ["sid=a%26b; path=/; samesite=strict; secure"]
        );
    }

    #[test]
    fn test_set_cookie_with_options_rejects_before_write() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);

        let err = set_cookie_with_options(&CookieOptions::new("a", "1"), &writer).unwrap_err();
        assert!(err.is_validation());

        let options = CookieOptions::new("a", "1")
            .session_cookie(true)
            .expires(Expires::Seconds(10));
        assert!(set_cookie_with_options(&options, &writer).is_err());
        assert!(written.borrow().is_empty());
    }

    #[test]
    fn test_get_first_cookie() {
        let reader = || "a=1; b=hello%20world; c=3".to_string();
        assert_eq!(get_first_cookie("a", &reader), "1");
        assert_eq!(get_first_cookie("b", &reader), "hello world");
        assert_eq!(get_first_cookie("missing", &reader), "");
    }

    #[test]
    fn test_get_first_cookie_empty_jar() {
        let reader = String::new;
        assert_eq!(get_first_cookie("a", &reader), "");
    }

    #[test]
    fn test_get_first_cookie_returns_first_match() {
        let reader = || "a=1; a=2".to_string();
        assert_eq!(get_first_cookie("a", &reader), "1");
    }

    #[test]
    fn test_get_first_cookie_decodes_before_split() {
        let reader = || "a=x%3By; b=2".to_string();
        assert_eq!(get_first_cookie("a", &reader), "x");
    }

    #[test]
    fn test_get_first_cookie_malformed_escape() {
        let reader = || "a=100%; b=%E0%A4%A".to_string();
        assert_eq!(get_first_cookie("a", &reader), "100%");
    }

    #[test]
    fn test_get_cookie_alias() {
        let reader = || "k=v".to_string();
        assert_eq!(get_cookie("k", &reader), get_first_cookie("k", &reader));
    }

    #[test]
    fn test_get_cookie_names() {
        let reader = || "a=1; b=2;c=3".to_string();
        assert_eq!(get_cookie_names(&reader), ["a", "b", "c"]);

        let reader = || "a=1; ; =x; b".to_string();
        assert_eq!(get_cookie_names(&reader), ["a", "b"]);

        let reader = String::new;
        assert!(get_cookie_names(&reader).is_empty());
    }

    #[test]
    fn test_check_cookie() {
        let empty = String::new;
        assert!(!check_cookie("x", &empty));

        let reader = || "x=1".to_string();
        assert!(check_cookie("x", &reader));
    }

    #[test]
    fn test_remove_cookie_stops_once_absent() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);
        let reader = String::new;

        remove_cookie("a", &reader, &writer, Some("/app/"));

        assert_eq!(
            written.borrow().as_slice(),
            ["a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;path=/"]
        );
    }

    #[test]
    fn test_remove_cookie_tries_every_path_while_present() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);
        let reader = || "a=1".to_string();

        remove_cookie("a", &reader, &writer, Some("/app"));

        assert_eq!(
            written.borrow().as_slice(),
            [
                "a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;path=/",
                "a=;expires=Thu, 01 Jan 1970 00:00:01 GMT",
                "a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;path=/app",
                "a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;path=/app/",
            ]
        );
    }

    #[test]
    fn test_remove_cookie_root_base_skips_base_paths() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);
        let reader = || "a=1".to_string();

        remove_cookie("a", &reader, &writer, None);

        assert_eq!(written.borrow().len(), 2);
    }

    #[test]
    fn test_accessor_with_closures() {
        let written = RefCell::new(Vec::new());
        let writer = recording_writer(&written);
        let reader = || "a=1".to_string();

        let cookies = CookieAccessor::new(&reader, &writer).with_base_path("/app/");
        assert_eq!(cookies.base_path(), Some("/app/"));
        assert_eq!(cookies.get_cookie_names(), ["a"]);

        cookies.remove_cookie("a");
        assert_eq!(
            written.borrow().last().map(String::as_str),
            Some("a=;expires=Thu, 01 Jan 1970 00:00:01 GMT;path=/app/")
        );
    }
}
