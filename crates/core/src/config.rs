//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::{TreatmentError, TreatmentResult};
use ferticare_types::{NonEmptyText, PageSize};

/// Default backend base URL when no override is supplied.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    api_base_url: String,
    clinic_name: NonEmptyText,
    default_page_size: PageSize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns a `TreatmentError` if the base URL is not an absolute
    /// `http(s)://` URL.
    pub fn new(
        api_base_url: String,
        clinic_name: NonEmptyText,
        default_page_size: PageSize,
    ) -> TreatmentResult<Self> {
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_owned();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(TreatmentError::InvalidInput(
                "api_base_url must start with http:// or https://".into(),
            ));
        }

        Ok(Self {
            api_base_url,
            clinic_name,
            default_page_size,
        })
    }

    /// Base URL of the clinic backend, without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn clinic_name(&self) -> &NonEmptyText {
        &self.clinic_name
    }

    pub fn default_page_size(&self) -> PageSize {
        self.default_page_size
    }
}

/// Resolve the backend base URL from an environment value without reading the
/// environment directly. `None` falls back to the development default.
pub fn api_base_url_from_env_value(value: Option<String>) -> TreatmentResult<String> {
    match value {
        Some(url) if !url.trim().is_empty() => Ok(url),
        Some(_) => Err(TreatmentError::InvalidInput(
            "FERTICARE_API_URL cannot be empty".into(),
        )),
        None => Ok(DEFAULT_API_BASE_URL.to_owned()),
    }
}

/// Resolve the default page size from an environment value.
///
/// `None` yields the `PageSize` default. A present value must parse as an
/// integer within the backend's accepted range.
pub fn page_size_from_env_value(value: Option<String>) -> TreatmentResult<PageSize> {
    let Some(raw) = value else {
        return Ok(PageSize::default());
    };

    let parsed: u32 = raw.trim().parse().map_err(|_| {
        TreatmentError::InvalidInput(format!("FERTICARE_PAGE_SIZE is not an integer: {raw}"))
    })?;

    PageSize::new(parsed)
        .map_err(|e| TreatmentError::InvalidInput(format!("FERTICARE_PAGE_SIZE: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clinic() -> NonEmptyText {
        NonEmptyText::new("Sunrise Fertility").expect("clinic name should be valid")
    }

    #[test]
    fn new_strips_trailing_slash() {
        let cfg = CoreConfig::new(
            "https://clinic.example/api/".into(),
            clinic(),
            PageSize::default(),
        )
        .expect("config should be valid");
        assert_eq!(cfg.api_base_url(), "https://clinic.example/api");
    }

    #[test]
    fn new_rejects_non_http_url() {
        let err = CoreConfig::new("ftp://clinic.example".into(), clinic(), PageSize::default())
            .expect_err("non-http URL should be rejected");
        assert!(matches!(err, TreatmentError::InvalidInput(_)));
    }

    #[test]
    fn base_url_env_value_defaults_when_absent() {
        let url = api_base_url_from_env_value(None).expect("default should resolve");
        assert_eq!(url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_env_value_rejects_blank() {
        let err = api_base_url_from_env_value(Some("   ".into()))
            .expect_err("blank override should be rejected");
        assert!(matches!(err, TreatmentError::InvalidInput(_)));
    }

    #[test]
    fn page_size_env_value_parses_and_bounds() {
        assert_eq!(
            page_size_from_env_value(None)
                .expect("absent value should default")
                .get(),
            20
        );
        assert_eq!(
            page_size_from_env_value(Some("50".into()))
                .expect("50 should be accepted")
                .get(),
            50
        );
        assert!(matches!(
            page_size_from_env_value(Some("0".into())),
            Err(TreatmentError::InvalidInput(_))
        ));
        assert!(matches!(
            page_size_from_env_value(Some("lots".into())),
            Err(TreatmentError::InvalidInput(_))
        ));
    }
}
