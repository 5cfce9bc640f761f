//! `Authorization` header values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const AUTHORIZATION: &str = "Authorization";

/// Standard base64 (with padding) of the UTF-8 bytes of `"{email}:{password}"`.
pub fn basic_credentials(email: &str, password: &str) -> String {
    STANDARD.encode(format!("{email}:{password}"))
}

pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", basic_credentials(email, password))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credentials_fixture() {
        assert_eq!(basic_credentials("email", "password"), "ZW1haWw6cGFzc3dvcmQ=");
    }

    #[test]
    fn basic_credentials_are_padded_and_utf8() {
        // Three input bytes need no padding; four need two pad characters.
        assert_eq!(basic_credentials("a", "b"), "YTpi");
        assert_eq!(basic_credentials("ab", "c"), "YWI6Yw==");
        assert_eq!(basic_credentials("é", ""), "w6k6");
    }

    #[test]
    fn scheme_prefixes() {
        assert_eq!(basic("email", "password"), "Basic ZW1haWw6cGFzc3dvcmQ=");
        assert_eq!(bearer("mytoken"), "Bearer mytoken");
    }
}
