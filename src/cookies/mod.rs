//! Cookie access over a document cookie string.
//!
//! This module provides:
//!
//! - **Accessor**: named-cookie get/set/remove/list/check ([`accessor`])
//! - **Contracts**: the [`CookieReader`](readwrite::CookieReader) and
//!   [`CookieWriter`](readwrite::CookieWriter) the accessor goes through
//! - **Options**: attributes for validated writes ([`CookieOptions`](options::CookieOptions))
//! - **Jar**: the store behind a [`Document`](crate::document::Document)'s
//!   `document.cookie` ([`CookieJar`](jar::CookieJar))
//!
//! # Architecture
//!
//! | Browser | cookieaccess | Responsibility |
//! |---------|--------------|----------------|
//! | `document.cookie` getter | [`CookieReader`](readwrite::CookieReader) | Current cookie string |
//! | `document.cookie` setter | [`CookieWriter`](readwrite::CookieWriter) | Apply one cookie line |
//! | Cookie store | [`CookieJar`](jar::CookieJar) | `(name, path)` keyed cookies |
//!
//! # Injecting a reader and writer
//!
//! ```rust
//! use cookieaccess::cookies::accessor::{check_cookie, get_cookie_names};
//!
//! let reader = || "a=1; b=2;c=3".to_string();
//! assert_eq!(get_cookie_names(&reader), ["a", "b", "c"]);
//! assert!(!check_cookie("x", &String::new));
//! ```
//!
//! # Validated writes
//!
//! ```rust
//! use cookieaccess::cookies::accessor::set_cookie_with_options;
//! use cookieaccess::cookies::options::{CookieOptions, Expires, SameSite};
//!
//! let writer = |cookie: &str| cookie.to_string();
//! let options = CookieOptions::new("theme", "dark")
//!     .expires(Expires::Never)
//!     .same_site(SameSite::Lax);
//! set_cookie_with_options(&options, &writer)?;
//!
//! // Not a session cookie, so a TTL is required.
//! assert!(set_cookie_with_options(&CookieOptions::new("theme", "dark"), &writer).is_err());
//! # Ok::<(), cookieaccess::base::cookieerror::CookieError>(())
//! ```

pub mod accessor;
pub mod httpdate;
pub mod jar;
pub mod options;
pub mod readwrite;
