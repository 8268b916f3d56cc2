pub mod auth_claims;
pub mod payload;

pub use auth_claims::AuthClaims;
pub use payload::{ApiJson, ApiPath, ApiQuery};
