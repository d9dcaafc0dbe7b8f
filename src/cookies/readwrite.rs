//! Reader and writer contracts for the cookie string.
//!
//! Accessor functions never touch a jar directly; they go through a
//! [`CookieReader`] and a [`CookieWriter`]. Plain closures implement both, so
//! tests can substitute a fixed string or a recording writer:
//!
//! ```rust
//! use cookieaccess::cookies::accessor::get_first_cookie;
//!
//! let reader = || "theme=dark; lang=de".to_string();
//! assert_eq!(get_first_cookie("lang", &reader), "de");
//! ```

/// Returns the current cookie string verbatim, e.g. `name1=value1; name2=value2`.
pub trait CookieReader {
    fn read(&self) -> String;
}

/// Applies one formatted cookie line to the jar and returns the line it was given.
pub trait CookieWriter {
    fn write(&self, cookie: &str) -> String;
}

impl<F> CookieReader for F
where
    F: Fn() -> String,
{
    fn read(&self) -> String {
        self()
    }
}

impl<F> CookieWriter for F
where
    F: Fn(&str) -> String,
{
    fn write(&self, cookie: &str) -> String {
        self(cookie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_reader() {
        let reader = || "a=1".to_string();
        assert_eq!(reader.read(), "a=1");
    }

    #[test]
    fn test_closure_writer_records() {
        let written = RefCell::new(Vec::new());
        let writer = |cookie: &str| {
            written.borrow_mut().push(cookie.to_string());
            cookie.to_string()
        };

        assert_eq!(writer.write("a=1; path=/"), "a=1; path=/");
        assert_eq!(written.borrow().as_slice(), ["a=1; path=/"]);
    }
}
