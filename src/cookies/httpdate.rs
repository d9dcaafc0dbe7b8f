//! Cookie `expires` date formatting.
//!
//! Dates are written in the `Date.prototype.toUTCString()` shape browsers
//! accept in `document.cookie`: `Thu, 01 Jan 1970 00:00:01 GMT`.

use crate::base::cookieerror::CookieError;
use time::format_description::BorrowedFormatItem;
use time::macros::{datetime, format_description};
use time::{Duration, OffsetDateTime};

/// Expiration written when removing a cookie.
pub const BEGIN_OF_TIME: &str = "Thu, 01 Jan 1970 00:00:01 GMT";

/// Expiration written for cookies that never expire.
pub const END_OF_TIME: &str = "Fri, 31 Dec 9999 23:59:59 GMT";

const BEGIN_OF_TIME_DATETIME: OffsetDateTime = datetime!(1970-01-01 00:00:01 UTC);
const END_OF_TIME_DATETIME: OffsetDateTime = datetime!(9999-12-31 23:59:59 UTC);

const COOKIE_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format `at` (converted to UTC) as a cookie date.
pub fn format_cookie_date(at: OffsetDateTime) -> Result<String, CookieError> {
    Ok(at.to_offset(time::UtcOffset::UTC).format(COOKIE_DATE)?)
}

/// `now + seconds`, saturating at the begin/end-of-time dates.
pub fn expires_after(now: OffsetDateTime, seconds: i64) -> OffsetDateTime {
    match now.checked_add(Duration::seconds(seconds)) {
        Some(at) if at > END_OF_TIME_DATETIME => END_OF_TIME_DATETIME,
        Some(at) => at,
        None if seconds > 0 => END_OF_TIME_DATETIME,
        None => BEGIN_OF_TIME_DATETIME,
    }
}

/// `now + days`, saturating like [`expires_after`].
pub fn expires_after_days(now: OffsetDateTime, days: i64) -> OffsetDateTime {
    match days.checked_mul(86_400) {
        Some(seconds) => expires_after(now, seconds),
        None if days > 0 => END_OF_TIME_DATETIME,
        None => BEGIN_OF_TIME_DATETIME,
    }
}
