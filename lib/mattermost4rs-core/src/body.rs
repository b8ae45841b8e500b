//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use mattermost4rs_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Patch { nickname: String }
///
/// let patch = Patch { nickname: "al".to_string() };
/// let bytes = to_json(&patch).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"nickname":"al"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so the error names the field that failed
/// (e.g. `props.channel_id`).
///
/// # Errors
///
/// Returns [`Error::JsonDeserialization`](crate::Error::JsonDeserialization)
/// if the bytes are not valid JSON for `T`.
///
/// # Example
///
/// ```
/// use mattermost4rs_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct User { username: String }
///
/// let user: User = from_json(br#"{"username":"alice"}"#).expect("deserialize");
/// assert_eq!(user, User { username: "alice".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })?;
    deserializer
        .end()
        .map_err(|e| crate::Error::json_deserialization(".", e.to_string()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_trailing_garbage() {
        let result: Result<serde_json::Value> = from_json(br#"{"status":"OK"} trailing"#);
        let err = result.expect_err("should fail");
        assert!(err.is_deserialization());
    }

    #[test]
    fn from_json_reports_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Props {
            #[allow(dead_code)]
            channel_id: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Post {
            #[allow(dead_code)]
            props: Props,
        }

        let err = from_json::<Post>(br#"{"props":{"channel_id":7}}"#).expect_err("should fail");
        let crate::Error::JsonDeserialization { path, .. } = err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(path, "props.channel_id");
    }
}
