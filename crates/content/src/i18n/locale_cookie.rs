use std::fmt;

use cookie::{Cookie, SameSite};
use shared::domain::Locale;
use time::{Duration, OffsetDateTime};

pub const LOCALE_COOKIE: &str = "locale";
/// One year, in seconds.
pub const LOCALE_COOKIE_MAX_AGE: i64 = 365 * 24 * 60 * 60;

/// Persists the visitor's language for a year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCookie {
    pub locale: Locale,
    pub expires: OffsetDateTime,
}

impl LocaleCookie {
    pub fn new(locale: Locale, now: OffsetDateTime) -> Self {
        Self {
            locale,
            expires: now + Duration::seconds(LOCALE_COOKIE_MAX_AGE),
        }
    }

    pub fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((LOCALE_COOKIE, self.locale.to_string()))
            .path("/")
            .max_age(Duration::seconds(LOCALE_COOKIE_MAX_AGE))
            .expires(self.expires)
            .same_site(SameSite::Lax)
            .build()
    }
}

/// `Set-Cookie` value.
impl fmt::Display for LocaleCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_cookie(), f)
    }
}

/// Supported locale carried by a `locale` cookie.
pub fn locale_from_cookie(cookie: &Cookie<'_>) -> Option<Locale> {
    if cookie.name() != LOCALE_COOKIE {
        return None;
    }
    cookie.value().trim().parse().ok()
}

/// Supported locale named by the `locale` cookie of a raw `Cookie:` header.
pub fn locale_from_cookie_header(header: &str) -> Option<Locale> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == LOCALE_COOKIE)
        .and_then(|cookie| locale_from_cookie(&cookie))
}
