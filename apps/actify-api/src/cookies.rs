//! Session cookie - set and clear the httpOnly `Token` cookie.

use actix_web::cookie::{Cookie, SameSite};

use crate::config::Environment;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "Token";

/// Cookie attributes for the current environment.
///
/// Production serves the front end from another site, so the cookie must be
/// `Secure; SameSite=None` to be sent cross-site at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookiePolicy {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }

    /// Build the cookie holding a freshly issued token.
    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, token.to_string())
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .finish()
    }

    /// Build an expired cookie with the same attributes to clear the session.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.session_cookie("");
        cookie.make_removal();
        cookie
    }
}
