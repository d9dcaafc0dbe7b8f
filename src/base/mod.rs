//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): validation and document errors
//! - [`context`]: extension traits attaching context to foreign errors

pub mod context;
pub mod cookieerror;
