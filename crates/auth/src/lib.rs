//! `shopfront-auth` — authentication boundary for the admin area.
//!
//! Pure claims validation plus an HS256 token verifier. Decoupled from HTTP;
//! the API middleware owns header parsing and response codes.

pub mod claims;
pub mod jwt;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{AuthError, Hs256JwtValidator, JwtValidator};
