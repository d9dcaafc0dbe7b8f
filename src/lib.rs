//! # cookieaccess
//!
//! Named-cookie access over a `document.cookie`-style string.
//!
//! `cookieaccess` reads and writes individual cookies through a single
//! semicolon-delimited cookie string. The string is reached through an
//! injected reader and writer, so the same operations run against a live
//! [`Document`](document::Document) or a test double.
//!
//! ## Features
//!
//! - **Accessor**: get, set, remove, list and check cookies by name
//! - **Validated writes**: expiry, path, SameSite and Secure options
//! - **Removal heuristics**: retries on the paths browsers disagree on
//! - **Document jar**: in-memory `document.cookie` with path scoping and expiry
//!
//! ## Quick Start
//!
//! ```rust
//! use cookieaccess::cookies::accessor::CookieAccessor;
//! use cookieaccess::document::Document;
//! use url::Url;
//!
//! let doc = Document::new(Url::parse("https://example.com/").unwrap());
//! let cookies = CookieAccessor::for_document(&doc);
//!
//! cookies.set_cookie("session", "abc123", 1).unwrap();
//! assert!(cookies.check_cookie("session"));
//! assert_eq!(cookies.get_cookie_names(), ["session"]);
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Accessor, options, reader/writer contracts and the jar
//! - [`document`] - The default reader/writer and `<base>` path resolution

pub mod base;
pub mod cookies;
pub mod document;
