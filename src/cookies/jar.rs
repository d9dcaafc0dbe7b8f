use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use url::Url;

/// A cookie held by a [`CookieJar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    /// Raw value as written (not percent-decoded).
    pub value: String,
    pub path: String,
    /// `None` for session cookies.
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub same_site: Option<cookie::SameSite>,
    /// Insertion order; kept when a cookie is overwritten.
    pub sequence: u64,
}

impl StoredCookie {
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        self.expiration_time
            .is_some_and(|expiry| expiry <= current_time)
    }
}

/// The cookie store behind `document.cookie`.
///
/// Cookies are keyed by `(name, path)`. Lines written through
/// [`set_from_document`](Self::set_from_document) are applied the way a
/// browser applies an assignment to `document.cookie`, and
/// [`cookie_string_for`](Self::cookie_string_for) renders what reading
/// `document.cookie` returns for a document URL.
pub struct CookieJar {
    store: DashMap<(String, String), StoredCookie>,
    next_sequence: AtomicU64,
}

impl Default for CookieJar {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieJar {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
            next_sequence: AtomicU64::new(0),
        }
    }

    /// Apply one cookie line written by the document at `document_url`.
    ///
    /// Returns `true` if a cookie was stored, `false` if the line was ignored
    /// or deleted a cookie.
    pub fn set_from_document(&self, document_url: &Url, cookie_line: &str) -> bool {
        let parsed = match cookie::Cookie::parse(cookie_line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable cookie line");
                return false;
            }
        };

        let now = OffsetDateTime::now_utc();
        let name = parsed.name().to_string();
        let secure = parsed.secure().unwrap_or(false);

        if secure && document_url.scheme() != "https" {
            tracing::debug!(name = %name, "ignoring secure cookie from insecure document");
            return false;
        }

        let path = parsed
            .path()
            .filter(|p| p.starts_with('/'))
            .map(str::to_string)
            .unwrap_or_else(|| Self::default_path(document_url.path()));

        // Max-Age wins over Expires.
        let expiration_time = match parsed.max_age() {
            Some(max_age) => Some(now.checked_add(max_age).unwrap_or(now)),
            None => parsed.expires_datetime(),
        };

        let key = (name.clone(), path.clone());

        if expiration_time.is_some_and(|expiry| expiry <= now) {
            if self.store.remove(&key).is_some() {
                tracing::debug!(name = %name, path = %path, "cookie expired by write");
            }
            return false;
        }

        let mut cookie = StoredCookie {
            name,
            value: parsed.value().to_string(),
            path,
            expiration_time,
            secure,
            same_site: parsed.same_site(),
            sequence: 0,
        };

        match self.store.entry(key) {
            Entry::Occupied(mut entry) => {
                cookie.sequence = entry.get().sequence;
                entry.insert(cookie);
            }
            Entry::Vacant(entry) => {
                cookie.sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
                entry.insert(cookie);
            }
        }

        true
    }

    /// Cookies visible to the document at `document_url`, in `document.cookie`
    /// order: longest path first, then insertion order.
    pub fn cookies_for(&self, document_url: &Url) -> Vec<StoredCookie> {
        let now = OffsetDateTime::now_utc();
        let is_https = document_url.scheme() == "https";

        let mut result: Vec<StoredCookie> = self
            .store
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|cookie| Self::path_matches(&cookie.path, document_url.path()))
            .filter(|cookie| !cookie.secure || is_https)
            .filter(|cookie| !cookie.is_expired(now))
            .collect();

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.sequence.cmp(&b.sequence))
        });

        result
    }

    /// The `document.cookie` string for `document_url`.
    pub fn cookie_string_for(&self, document_url: &Url) -> String {
        self.cookies_for(document_url)
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Total cookie count, including ones not visible to any given document.
    pub fn total_cookie_count(&self) -> usize {
        self.store.len()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Check if request path matches cookie path.
    /// Implements RFC 6265 path matching.
    fn path_matches(cookie_path: &str, request_path: &str) -> bool {
        if request_path == cookie_path {
            return true;
        }

        if request_path.starts_with(cookie_path) {
            if cookie_path.ends_with('/') {
                return true;
            }
            return request_path.as_bytes().get(cookie_path.len()) == Some(&b'/');
        }

        false
    }

    /// RFC 6265 default-path: the request path up to, not including, its last `/`.
    fn default_path(request_path: &str) -> String {
        if !request_path.starts_with('/') {
            return "/".to_string();
        }
        match request_path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(idx) => request_path[..idx].to_string(),
        }
    }
}
