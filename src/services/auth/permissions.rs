use super::{AuthError, Claims};

/// Check that `permission` is listed in the token's `permissions` claim.
pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let granted = claims
        .permissions()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if granted.contains(&permission) {
        Ok(())
    } else {
        Err(AuthError::PermissionDenied)
    }
}
