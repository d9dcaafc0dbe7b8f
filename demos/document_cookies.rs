//! Document cookie example.
//!
//! This example reads and writes cookies through a document with a `<base>`
//! element, the way page scripts use `document.cookie`.

use cookieaccess::cookies::accessor::CookieAccessor;
use cookieaccess::cookies::options::{CookieOptions, Expires, SameSite};
use cookieaccess::document::Document;
use url::Url;

fn main() {
    let html = r#"<html><head><base href="/portal/"></head><body></body></html>"#;
    let doc = Document::from_html(Url::parse("https://example.com/portal/index.html").unwrap(), html);
    let cookies = CookieAccessor::for_document(&doc);

    // Plain write: value as-is, expires in 7 days, path /
    let written = cookies.set_cookie("visits", 1, 7).unwrap();
    println!("wrote: {}", written);

    // Validated write, scoped to the portal
    let options = CookieOptions::new("theme", "dark mode")
        .expires(Expires::Never)
        .same_site(SameSite::Lax)
        .path("/portal");
    cookies.set_cookie_with_options(&options).unwrap();

    println!("document.cookie = {:?}", doc.cookie_jar().cookie_string_for(doc.url()));
    println!("names: {:?}", cookies.get_cookie_names());
    println!("theme: {}", cookies.get_first_cookie("theme"));

    // A session cookie can not carry an expiry
    let invalid = CookieOptions::new("sid", "x")
        .session_cookie(true)
        .expires(Expires::Seconds(60));
    if let Err(e) = cookies.set_cookie_with_options(&invalid) {
        println!("rejected: {}", e);
    }

    // Removal falls back to the <base> path
    cookies.remove_cookie("theme");
    println!("theme after removal: {:?}", cookies.get_first_cookie("theme"));
}
