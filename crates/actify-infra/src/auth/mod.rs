//! Authentication implementations.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService, TOKEN_TTL_HOURS};
