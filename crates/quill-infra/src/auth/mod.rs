//! Bearer token authentication.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
