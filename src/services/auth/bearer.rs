use axum::http::{HeaderMap, header};

use super::AuthError;

/// Pull the raw token out of `Authorization: Bearer <token>`.
///
/// The header must be exactly two space-separated parts and the scheme is
/// matched case-insensitively.
pub fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredential)?;

    let parts: Vec<&str> = value.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => {
            Ok(*token)
        }
        _ => Err(AuthError::MissingCredential),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn accepts_bearer_scheme() {
        let headers = with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        let headers = with_auth("bEaReR abc.def.ghi");
        assert_eq!(extract_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn missing_header() {
        assert_eq!(
            extract_token(&HeaderMap::new()),
            Err(AuthError::MissingCredential)
        );
    }

    #[test]
    fn rejects_wrong_shape() {
        for value in [
            "Bearer",
            "Bearer ",
            "abc.def.ghi",
            "Bearer a b",
            "Basic dXNlcjpwYXNz",
            "Bearer  abc",
        ] {
            assert_eq!(
                extract_token(&with_auth(value)),
                Err(AuthError::MissingCredential),
                "{value:?}"
            );
        }
    }
}
