//! Status validation of response envelopes.

use bytes::Bytes;

use crate::error::ValidationError;
use crate::http::{HttpResponse, ResponseMetadata};

/// Return the body unchanged if the response is HTTP with a 2xx status.
///
/// Any other HTTP status, including codes outside the registered range,
/// fails with `StatusCode` carrying the literal code.
pub fn validate(response: HttpResponse) -> Result<Bytes, ValidationError> {
    let status = match response.metadata {
        ResponseMetadata::Http { status, .. } => status,
        ResponseMetadata::NonHttp => return Err(ValidationError::NotHttpResponse),
    };
    if !(200..300).contains(&status) {
        return Err(ValidationError::StatusCode(status));
    }
    Ok(response.body)
}
