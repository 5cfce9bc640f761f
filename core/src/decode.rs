//! JSON decoding of validated response bodies.

use serde::de::DeserializeOwned;

use crate::error::DecodeError;

/// Decode `bytes` as `T`. Unknown fields are ignored, missing required
/// fields and malformed JSON fail.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Todo, Token};

    #[test]
    fn decodes_list() {
        let todos: Vec<Todo> =
            decode(br#"[{"id":1,"title":"test"},{"id":2,"title":"test 2"}]"#).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, Some(2));
    }

    #[test]
    fn malformed_json_fails() {
        let err = decode::<Todo>(b"{{}").unwrap_err();
        assert!(err.0.is_syntax());
    }

    #[test]
    fn type_mismatch_fails() {
        let err = decode::<Todo>(br#"{"id":"one","title":"x"}"#).unwrap_err();
        assert!(err.0.is_data());
    }

    #[test]
    fn missing_field_fails() {
        assert!(decode::<Token>(br#"{"token":"abc"}"#).is_err());
    }

    #[test]
    fn empty_body_fails() {
        assert!(decode::<Todo>(b"").unwrap_err().0.is_eof());
    }
}
