//! Backend response envelopes.
//!
//! The backend wraps single entities as `{code, message, data}` and paginated
//! lists as `{data, metaData: {...}}`. Decoding goes through
//! `serde_path_to_error` so a schema mismatch reports the failing JSON path
//! rather than a bare serde message.

use crate::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Single-entity response wrapper.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMeta {
    pub page_number: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of a paginated list response.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedData<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta_data: PageMeta,
}

/// Decode a JSON body, reporting the path to the first mismatching field.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);

    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let source = err.into_inner();
        ApiError::Decode {
            path: if path.is_empty() {
                "<root>".to_owned()
            } else {
                path
            },
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        value: u32,
    }

    #[test]
    fn envelope_decodes_with_absent_data() {
        let envelope: Envelope<Probe> =
            decode_json(r#"{"code": 200, "message": "ok"}"#).expect("envelope should decode");
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.message, "ok");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn page_meta_uses_camel_case_wire_names() {
        let page: PagedData<Probe> = decode_json(
            r#"{
                "data": [{"value": 1}, {"value": 2}],
                "metaData": {
                    "pageNumber": 2,
                    "pageSize": 20,
                    "totalCount": 55,
                    "totalPages": 3,
                    "hasNext": true,
                    "hasPrevious": true
                }
            }"#,
        )
        .expect("page should decode");

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.meta_data.page_number, 2);
        assert_eq!(page.meta_data.total_count, 55);
        assert!(page.meta_data.has_next);
    }

    #[test]
    fn page_tolerates_missing_meta_data() {
        let page: PagedData<Probe> =
            decode_json(r#"{"data": []}"#).expect("page without metaData should decode");
        assert!(page.data.is_empty());
        assert_eq!(page.meta_data.total_count, 0);
    }

    #[test]
    fn decode_reports_failing_path() {
        let err = decode_json::<PagedData<Probe>>(r#"{"data": [{"value": "three"}]}"#)
            .expect_err("string value should not decode as u32");
        match err {
            ApiError::Decode { path, .. } => {
                assert!(path.starts_with("data"), "path should locate the list: {path}");
                assert!(path.ends_with("value"), "path should name the field: {path}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_reports_root_for_top_level_garbage() {
        let err = decode_json::<Envelope<Probe>>("not json").expect_err("garbage should not decode");
        assert!(matches!(err, ApiError::Decode { path, .. } if path == "<root>"));
    }
}
