//! Options for [`set_cookie_with_options`](crate::cookies::accessor::set_cookie_with_options).

use crate::base::cookieerror::CookieError;
use crate::cookies::httpdate::{self, END_OF_TIME};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use time::OffsetDateTime;

/// Characters `encodeURIComponent` escapes: everything except
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "strict",
            SameSite::Lax => "lax",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cookie time-to-live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expires {
    /// Expire this many seconds from now.
    Seconds(i64),
    /// Never expire; written as the end-of-time date.
    Never,
}

impl Expires {
    pub fn is_positive(&self) -> bool {
        match self {
            Expires::Seconds(secs) => *secs > 0,
            Expires::Never => true,
        }
    }

    /// The `expires` attribute value relative to `now`.
    pub fn to_cookie_date(&self, now: OffsetDateTime) -> Result<String, CookieError> {
        match self {
            Expires::Never => Ok(END_OF_TIME.to_string()),
            Expires::Seconds(secs) => httpdate::format_cookie_date(httpdate::expires_after(now, *secs)),
        }
    }
}

impl Default for Expires {
    fn default() -> Self {
        Expires::Seconds(-1)
    }
}

/// A cookie to write, with its attributes.
///
/// A cookie is either a session cookie (no `expires` attribute) or has a
/// positive time-to-live; [`CookieOptions::validate`] rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    /// Cookie name, written verbatim.
    pub name: String,
    /// Cookie value, percent-encoded when written.
    pub value: String,
    pub expires: Expires,
    pub path: String,
    pub same_site: SameSite,
    pub secure: bool,
    pub session_cookie: bool,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            expires: Expires::default(),
            path: "/".to_string(),
            same_site: SameSite::Strict,
            secure: true,
            session_cookie: false,
        }
    }
}

impl CookieOptions {
    /// Create options for `name=value` with defaults.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Set time-to-live.
    pub fn expires(mut self, expires: Expires) -> Self {
        self.expires = expires;
        self
    }

    /// Set path.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set SameSite policy.
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Enable or disable the Secure attribute.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Mark as session cookie.
    pub fn session_cookie(mut self, session_cookie: bool) -> Self {
        self.session_cookie = session_cookie;
        self
    }

    pub fn validate(&self) -> Result<(), CookieError> {
        if !self.session_cookie && !self.expires.is_positive() {
            return Err(CookieError::non_positive_expiry(&self.name));
        }
        if self.session_cookie && self.expires.is_positive() {
            return Err(CookieError::session_cookie_with_expiry(&self.name));
        }
        Ok(())
    }

    /// Validate and render the cookie line handed to the writer.
    ///
    /// `name=<encoded value>[; expires=<date>]; path=<path>; samesite=<s>[; secure]`
    pub fn to_cookie_string(&self, now: OffsetDateTime) -> Result<String, CookieError> {
        self.validate()?;

        let mut line = format!(
            "{}={}",
            self.name,
            utf8_percent_encode(&self.value, URI_COMPONENT)
        );
        if !self.session_cookie {
            line.push_str("; expires=");
            line.push_str(&self.expires.to_cookie_date(now)?);
        }
        line.push_str("; path=");
        line.push_str(&self.path);
        line.push_str("; samesite=");
        line.push_str(self.same_site.as_str());
        if self.secure {
            line.push_str("; secure");
        }
        Ok(line)
    }
}
