//! `application/x-www-form-urlencoded` bodies.
//!
//! Every store parameter uses style `form` with `explode = true`; for scalar
//! values that is plain `key=value`, which is exactly what
//! `serde_urlencoded` emits for a flat struct.

use serde::Serialize;

use crate::error::ApiError;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode a flat parameter struct (or a slice of pairs) as a form body.
///
/// Fields that serialize to nothing are left out entirely.
pub fn to_form_urlencoded<T: Serialize + ?Sized>(item: &T) -> Result<String, ApiError> {
    Ok(serde_urlencoded::to_string(item)?)
}
