//! The HTTP client for the clinic backend.
//!
//! Responsibilities:
//! - Build backend URLs and normalized pagination queries
//! - Apply the response policy: HTTP 404 on a detail fetch is "no data", the
//!   backend's already-signed code on a sign request is success, any other
//!   non-success status surfaces the backend-provided message
//! - Decode bodies through the envelope layer
//!
//! There is no retry layer; reads fail fast and rely on reqwest's defaults
//! for timeouts. The decode policy lives in plain functions over
//! `(status, body)` so it can be exercised without a network.

use crate::envelope::{decode_json, Envelope, PagedData};
use crate::models::{
    Agreement, Appointment, CancelAppointmentRequest, CreateAppointmentRequest,
    CreateMedicalRecordRequest, CreatePrescriptionRequest, CreateServiceRequestRequest,
    CreateTransactionRequest, CreateTreatmentPlanRequest, MedicalRecord, Medicine, Patient,
    Prescription, ServiceItem, ServiceRequest, SignAgreementRequest, Transaction, Treatment,
    TreatmentCycle,
};
use crate::{ApiError, ApiResult};
use ferticare_core::agreement::{SignOutcome, SignerRole};
use ferticare_core::CoreConfig;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// Backend envelope code meaning "this agreement role is already signed".
/// Treated as success to tolerate racing duplicate sign submissions.
pub const ALREADY_SIGNED_CODE: i64 = 4090;

/// Typed client over the clinic backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl ApiClient {
    /// Create a client from the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` if the underlying HTTP client cannot be built.
    pub fn new(config: &CoreConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url().to_owned(),
            page_size: config.default_page_size().get(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn page_query(&self, page: u32) -> [(&'static str, String); 2] {
        [
            ("pageNumber", page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }

    async fn get_raw(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<(StatusCode, String)> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<(StatusCode, String)> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn get_page<T: DeserializeOwned>(&self, path: &str, page: u32) -> ApiResult<PagedData<T>> {
        let (status, body) = self.get_raw(path, &self.page_query(page)).await?;
        decode_list(status, &body)
    }

    async fn get_detail<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Option<T>> {
        let (status, body) = self.get_raw(path, &[]).await?;
        decode_detail(status, &body)
    }

    async fn post_mutation<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        request: &B,
    ) -> ApiResult<T> {
        let (status, body) = self.post_raw(path, request).await?;
        decode_mutation(status, &body)
    }
}

// ============================================================================
// Appointments
// ============================================================================

impl ApiClient {
    pub async fn list_appointments(&self, page: u32) -> ApiResult<PagedData<Appointment>> {
        self.get_page("/appointments", page).await
    }

    pub async fn get_appointment(&self, id: Uuid) -> ApiResult<Option<Appointment>> {
        self.get_detail(&format!("/appointments/{id}")).await
    }

    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Appointment> {
        self.post_mutation("/appointments", request).await
    }

    /// Cancel an appointment with a reason the receptionist supplies.
    pub async fn cancel_appointment(&self, id: Uuid, reason: String) -> ApiResult<()> {
        let request = CancelAppointmentRequest { reason };
        let (status, body) = self
            .post_raw(&format!("/appointments/{id}/cancel"), &request)
            .await?;
        decode_ack(status, &body)
    }
}

// ============================================================================
// Patients
// ============================================================================

impl ApiClient {
    pub async fn list_patients(&self, page: u32) -> ApiResult<PagedData<Patient>> {
        self.get_page("/patients", page).await
    }

    pub async fn get_patient(&self, id: Uuid) -> ApiResult<Option<Patient>> {
        self.get_detail(&format!("/patients/{id}")).await
    }
}

// ============================================================================
// Treatments and cycles
// ============================================================================

impl ApiClient {
    pub async fn list_treatments(&self, page: u32) -> ApiResult<PagedData<Treatment>> {
        self.get_page("/treatments", page).await
    }

    pub async fn get_treatment_cycle(&self, id: Uuid) -> ApiResult<Option<TreatmentCycle>> {
        self.get_detail(&format!("/treatment-cycles/{id}")).await
    }

    /// The backend's live view of a cycle's current step, as a numeric index
    /// into the protocol catalogue. `None` when the backend has no opinion.
    pub async fn get_cycle_current_step(&self, id: Uuid) -> ApiResult<Option<u32>> {
        self.get_detail(&format!("/treatment-cycles/{id}/current-step"))
            .await
    }

    pub async fn advance_cycle_step(&self, id: Uuid) -> ApiResult<TreatmentCycle> {
        let (status, body) = self
            .post_raw(&format!("/treatment-cycles/{id}/advance-step"), &())
            .await?;
        decode_mutation(status, &body)
    }

    pub async fn create_treatment_plan(
        &self,
        request: &CreateTreatmentPlanRequest,
    ) -> ApiResult<Treatment> {
        self.post_mutation("/treatments/plans", request).await
    }
}

// ============================================================================
// Medical records and prescriptions
// ============================================================================

impl ApiClient {
    pub async fn list_medical_records(
        &self,
        patient_id: Uuid,
        page: u32,
    ) -> ApiResult<PagedData<MedicalRecord>> {
        self.get_page(&format!("/patients/{patient_id}/medical-records"), page)
            .await
    }

    pub async fn get_medical_record(&self, id: Uuid) -> ApiResult<Option<MedicalRecord>> {
        self.get_detail(&format!("/medical-records/{id}")).await
    }

    pub async fn create_medical_record(
        &self,
        request: &CreateMedicalRecordRequest,
    ) -> ApiResult<MedicalRecord> {
        self.post_mutation("/medical-records", request).await
    }

    pub async fn create_prescription(
        &self,
        request: &CreatePrescriptionRequest,
    ) -> ApiResult<Prescription> {
        self.post_mutation("/prescriptions", request).await
    }
}

// ============================================================================
// Service requests and catalogues
// ============================================================================

impl ApiClient {
    pub async fn create_service_request(
        &self,
        request: &CreateServiceRequestRequest,
    ) -> ApiResult<ServiceRequest> {
        self.post_mutation("/service-requests", request).await
    }

    pub async fn list_medicines(&self, page: u32) -> ApiResult<PagedData<Medicine>> {
        self.get_page("/medicines", page).await
    }

    pub async fn list_services(&self, page: u32) -> ApiResult<PagedData<ServiceItem>> {
        self.get_page("/services", page).await
    }
}

// ============================================================================
// Agreements
// ============================================================================

impl ApiClient {
    pub async fn get_agreement(&self, cycle_id: Uuid) -> ApiResult<Option<Agreement>> {
        self.get_detail(&format!("/treatment-cycles/{cycle_id}/agreement"))
            .await
    }

    /// Sign an agreement for the given role.
    ///
    /// The backend reports a duplicate sign with [`ALREADY_SIGNED_CODE`];
    /// that is returned as [`SignOutcome::AlreadySigned`], not as an error.
    pub async fn sign_agreement(&self, id: Uuid, role: SignerRole) -> ApiResult<SignOutcome> {
        let request = SignAgreementRequest { role };
        let (status, body) = self
            .post_raw(&format!("/agreements/{id}/sign"), &request)
            .await?;
        decode_sign(status, &body)
    }
}

// ============================================================================
// Transactions
// ============================================================================

impl ApiClient {
    pub async fn list_transactions(&self, page: u32) -> ApiResult<PagedData<Transaction>> {
        self.get_page("/transactions", page).await
    }

    pub async fn get_transaction(&self, id: Uuid) -> ApiResult<Option<Transaction>> {
        self.get_detail(&format!("/transactions/{id}")).await
    }

    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> ApiResult<Transaction> {
        self.post_mutation("/transactions", request).await
    }
}

// ============================================================================
// Response policy (pure over status + body)
// ============================================================================

/// Best-effort extraction of the backend's error message from a body.
fn backend_message(body: &str) -> String {
    if let Ok(envelope) = decode_json::<Envelope<serde_json::Value>>(body) {
        if !envelope.message.trim().is_empty() {
            return envelope.message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no error message provided".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Detail-fetch policy: 404 is "no data", other failures carry the message.
fn decode_detail<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<Option<T>> {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            message: backend_message(body),
        });
    }

    let envelope: Envelope<T> = decode_json(body)?;
    Ok(envelope.data)
}

/// List-fetch policy: pages decode directly, failures carry the message.
fn decode_list<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<PagedData<T>> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            message: backend_message(body),
        });
    }
    decode_json(body)
}

/// Mutation policy: success must carry data; a success envelope without data
/// is a backend rejection.
fn decode_mutation<T: DeserializeOwned>(status: StatusCode, body: &str) -> ApiResult<T> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            message: backend_message(body),
        });
    }

    let envelope: Envelope<T> = decode_json(body)?;
    envelope.data.ok_or(ApiError::Backend {
        code: envelope.code,
        message: envelope.message,
    })
}

/// Mutation policy for endpoints whose response body carries no entity.
fn decode_ack(status: StatusCode, body: &str) -> ApiResult<()> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            message: backend_message(body),
        });
    }
    Ok(())
}

/// Sign policy: the already-signed envelope code is success regardless of the
/// HTTP status the backend paired it with.
fn decode_sign(status: StatusCode, body: &str) -> ApiResult<SignOutcome> {
    if let Ok(envelope) = decode_json::<Envelope<serde_json::Value>>(body) {
        if envelope.code == ALREADY_SIGNED_CODE {
            return Ok(SignOutcome::AlreadySigned);
        }
        if status.is_success() {
            return Ok(SignOutcome::Signed);
        }
        return Err(ApiError::Status {
            status,
            message: if envelope.message.trim().is_empty() {
                backend_message(body)
            } else {
                envelope.message
            },
        });
    }

    if status.is_success() {
        Ok(SignOutcome::Signed)
    } else {
        Err(ApiError::Status {
            status,
            message: backend_message(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferticare_core::config::CoreConfig;
    use ferticare_types::{NonEmptyText, PageSize};

    fn test_client() -> ApiClient {
        let config = CoreConfig::new(
            "https://clinic.example/api/".into(),
            NonEmptyText::new("Sunrise Fertility").expect("clinic name should be valid"),
            PageSize::new(25).expect("page size should be valid"),
        )
        .expect("config should be valid");
        ApiClient::new(&config).expect("client should build")
    }

    #[test]
    fn urls_join_without_double_slashes() {
        let client = test_client();
        assert_eq!(
            client.url("/appointments"),
            "https://clinic.example/api/appointments"
        );
    }

    #[test]
    fn page_query_uses_normalized_parameter_names() {
        let client = test_client();
        let query = client.page_query(3);
        assert_eq!(query[0], ("pageNumber", "3".to_owned()));
        assert_eq!(query[1], ("pageSize", "25".to_owned()));
    }

    #[test]
    fn detail_404_is_no_data_not_an_error() {
        let result: Option<Appointment> =
            decode_detail(StatusCode::NOT_FOUND, "").expect("404 should not be an error");
        assert!(result.is_none());
    }

    #[test]
    fn detail_success_unwraps_the_envelope() {
        let body = r#"{
            "code": 200,
            "message": "ok",
            "data": {"id": "00000000-0000-0000-0000-000000000001", "status": "Confirmed"}
        }"#;
        let appointment: Option<Appointment> =
            decode_detail(StatusCode::OK, body).expect("detail should decode");
        assert!(appointment.is_some());
    }

    #[test]
    fn detail_failure_surfaces_backend_message() {
        let body = r#"{"code": 500, "message": "cycle storage unavailable"}"#;
        let err = decode_detail::<Appointment>(StatusCode::INTERNAL_SERVER_ERROR, body)
            .expect_err("500 should be an error");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "cycle storage unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn mutation_without_data_is_a_backend_rejection() {
        let body = r#"{"code": 4221, "message": "agreement not fully signed"}"#;
        let err = decode_mutation::<TreatmentCycle>(StatusCode::OK, body)
            .expect_err("missing data should be an error");
        assert!(matches!(err, ApiError::Backend { code: 4221, .. }));
    }

    #[test]
    fn sign_already_signed_code_is_success_even_on_conflict_status() {
        let body = r#"{"code": 4090, "message": "doctor has already signed"}"#;
        let outcome =
            decode_sign(StatusCode::CONFLICT, body).expect("already-signed should be success");
        assert_eq!(outcome, SignOutcome::AlreadySigned);
    }

    #[test]
    fn sign_success_without_special_code_is_signed() {
        let body = r#"{"code": 200, "message": "ok"}"#;
        let outcome = decode_sign(StatusCode::OK, body).expect("sign should succeed");
        assert_eq!(outcome, SignOutcome::Signed);
    }

    #[test]
    fn sign_failure_with_other_code_is_an_error() {
        let body = r#"{"code": 4003, "message": "agreement is void"}"#;
        let err = decode_sign(StatusCode::BAD_REQUEST, body).expect_err("sign should fail");
        assert!(matches!(err, ApiError::Status { message, .. } if message == "agreement is void"));
    }

    #[test]
    fn ack_failure_uses_plain_body_when_envelope_is_absent() {
        let err =
            decode_ack(StatusCode::BAD_GATEWAY, "upstream timeout").expect_err("ack should fail");
        assert!(matches!(err, ApiError::Status { message, .. } if message == "upstream timeout"));
    }

    #[test]
    fn current_step_detail_decodes_numeric_payload() {
        let body = r#"{"code": 200, "message": "ok", "data": 2}"#;
        let index: Option<u32> =
            decode_detail(StatusCode::OK, body).expect("numeric detail should decode");
        assert_eq!(index, Some(2));
    }
}
