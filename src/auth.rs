//! Bearer token extraction.
//!
//! Tokens are issued and verified by an external auth service; this module
//! only parses the `Authorization: Bearer <token>` header so handlers can
//! reject unauthenticated requests when configured to.

use actix_web::http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use actix_web::{
    error,
    http::header::{Header, TryIntoHeaderValue},
};
use std::fmt;

/// A bearer token taken from the `Authorization` header.
#[derive(Debug)]
pub struct BearerAuth(String);

impl BearerAuth {
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl Header for BearerAuth {
    fn name() -> HeaderName {
        AUTHORIZATION
    }

    fn parse<M>(msg: &M) -> Result<Self, error::ParseError>
    where
        M: actix_web::HttpMessage,
    {
        let header_value = msg
            .headers()
            .get(AUTHORIZATION)
            .ok_or(error::ParseError::Header)?;
        let value = header_value.to_str().map_err(|_| error::ParseError::Header)?;
        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(error::ParseError::Header)?;
        Ok(BearerAuth(token.to_owned()))
    }
}

impl fmt::Display for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryIntoHeaderValue for BearerAuth {
    type Error = actix_web::http::header::InvalidHeaderValue;

    fn try_into_value(self) -> Result<HeaderValue, Self::Error> {
        HeaderValue::from_str(&format!("Bearer {}", self.0))
    }
}
