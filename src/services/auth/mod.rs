pub mod bearer;
pub mod cache;
pub mod claims;
pub mod error;
pub mod factory;
pub mod guard;
pub mod jwks;
pub mod permissions;
pub mod verifier;

pub use cache::CachedKeySet;
pub use claims::Claims;
pub use error::AuthError;
pub use factory::build_auth_guard;
pub use guard::AuthGuard;
pub use verifier::TokenVerifier;
