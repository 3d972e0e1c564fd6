//! One-shot notices carried across a redirect in a signed cookie.

use std::convert::Infallible;
use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::state::SharedState;

const COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlashLevel::Success => f.write_str("success"),
            FlashLevel::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Hex keeps accents, quotes and `;` out of the raw cookie value.
    fn encode(&self) -> String {
        hex::encode(format!("{}\n{}", self.level, self.message))
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = hex::decode(value).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let (level, message) = text.split_once('\n')?;
        let level = match level {
            "success" => FlashLevel::Success,
            "error" => FlashLevel::Error,
            _ => return None,
        };
        Some(Self {
            level,
            message: message.to_string(),
        })
    }
}

/// Extractor over the signed flash cookie. Return it as part of the
/// response so that additions and removals reach the browser.
pub struct FlashJar {
    jar: SignedCookieJar,
    secure: bool,
}

impl FlashJar {
    /// Pop the pending flash, if any. The cookie is cleared on the response.
    pub fn take(self) -> (Self, Option<Flash>) {
        let flash = self
            .jar
            .get(COOKIE_NAME)
            .and_then(|cookie| Flash::decode(cookie.value()));

        if flash.is_none() && self.jar.get(COOKIE_NAME).is_none() {
            return (self, None);
        }

        let jar = self.jar.remove(Cookie::build(COOKIE_NAME).path("/"));
        (
            Self {
                jar,
                secure: self.secure,
            },
            flash,
        )
    }

    pub fn push(self, flash: Flash) -> Self {
        let cookie = Cookie::build((COOKIE_NAME, flash.encode()))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build();
        Self {
            jar: self.jar.add(cookie),
            secure: self.secure,
        }
    }

    /// Redirect to `to`, surfacing `flash` on the next page load.
    pub fn redirect(self, to: &str, flash: Flash) -> Response {
        (self.push(flash), Redirect::to(to)).into_response()
    }
}

impl FromRequestParts<SharedState> for FlashJar {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        Ok(FlashJar {
            jar: SignedCookieJar::from_headers(&parts.headers, state.cookie_key.clone()),
            secure: state.config.secure_cookies(),
        })
    }
}

impl IntoResponseParts for FlashJar {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
