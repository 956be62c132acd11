//! Read-through queries and mutation invalidation edges.
//!
//! `QueryService` is what the screens talk to: reads go through the cache,
//! mutations go to the backend and then invalidate the topics they dirty.
//! The edge from each mutation to its topics is declared here, next to the
//! mutation, so the coupling is visible in one place.

use crate::cache::{QueryCache, QueryKey, Topic};
use crate::client::ApiClient;
use crate::envelope::PagedData;
use crate::models::{
    Agreement, Appointment, CreateAppointmentRequest, CreateMedicalRecordRequest,
    CreatePrescriptionRequest, CreateServiceRequestRequest, CreateTransactionRequest,
    CreateTreatmentPlanRequest, MedicalRecord, Medicine, Patient, Prescription, ServiceItem,
    ServiceRequest, Transaction, Treatment, TreatmentCycle,
};
use crate::ApiResult;
use ferticare_core::agreement::{SignOutcome, SignerRole};
use ferticare_core::steps::{resolve_steps, ResolvedSteps};
use uuid::Uuid;

/// Cached query surface over the backend client.
#[derive(Debug)]
pub struct QueryService {
    client: ApiClient,
    cache: QueryCache,
}

impl QueryService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: QueryCache::new(),
        }
    }

    /// The underlying cache, exposed for inspection.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}

// ============================================================================
// Cached reads
// ============================================================================

impl QueryService {
    pub async fn appointments_page(&self, page: u32) -> ApiResult<PagedData<Appointment>> {
        let key = QueryKey::Appointments { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_appointments(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn appointment(&self, id: Uuid) -> ApiResult<Option<Appointment>> {
        let key = QueryKey::Appointment { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_appointment(id).await?;
        if let Some(appointment) = &fetched {
            self.cache.put(key, appointment);
        }
        Ok(fetched)
    }

    pub async fn patients_page(&self, page: u32) -> ApiResult<PagedData<Patient>> {
        let key = QueryKey::Patients { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_patients(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn patient(&self, id: Uuid) -> ApiResult<Option<Patient>> {
        let key = QueryKey::Patient { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_patient(id).await?;
        if let Some(patient) = &fetched {
            self.cache.put(key, patient);
        }
        Ok(fetched)
    }

    pub async fn treatments_page(&self, page: u32) -> ApiResult<PagedData<Treatment>> {
        let key = QueryKey::Treatments { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_treatments(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn treatment_cycle(&self, id: Uuid) -> ApiResult<Option<TreatmentCycle>> {
        let key = QueryKey::TreatmentCycle { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_treatment_cycle(id).await?;
        if let Some(cycle) = &fetched {
            self.cache.put(key, cycle);
        }
        Ok(fetched)
    }

    pub async fn cycle_current_step(&self, id: Uuid) -> ApiResult<Option<u32>> {
        let key = QueryKey::CycleCurrentStep { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_cycle_current_step(id).await?;
        if let Some(index) = &fetched {
            self.cache.put(key, index);
        }
        Ok(fetched)
    }

    pub async fn medical_records_page(
        &self,
        patient_id: Uuid,
        page: u32,
    ) -> ApiResult<PagedData<MedicalRecord>> {
        let key = QueryKey::MedicalRecords { patient_id, page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_medical_records(patient_id, page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn medical_record(&self, id: Uuid) -> ApiResult<Option<MedicalRecord>> {
        let key = QueryKey::MedicalRecord { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_medical_record(id).await?;
        if let Some(record) = &fetched {
            self.cache.put(key, record);
        }
        Ok(fetched)
    }

    pub async fn agreement(&self, cycle_id: Uuid) -> ApiResult<Option<Agreement>> {
        let key = QueryKey::Agreement { cycle_id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_agreement(cycle_id).await?;
        if let Some(agreement) = &fetched {
            self.cache.put(key, agreement);
        }
        Ok(fetched)
    }

    pub async fn transactions_page(&self, page: u32) -> ApiResult<PagedData<Transaction>> {
        let key = QueryKey::Transactions { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_transactions(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn transaction(&self, id: Uuid) -> ApiResult<Option<Transaction>> {
        let key = QueryKey::Transaction { id };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(Some(hit));
        }
        let fetched = self.client.get_transaction(id).await?;
        if let Some(transaction) = &fetched {
            self.cache.put(key, transaction);
        }
        Ok(fetched)
    }

    pub async fn medicines_page(&self, page: u32) -> ApiResult<PagedData<Medicine>> {
        let key = QueryKey::Medicines { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_medicines(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    pub async fn services_page(&self, page: u32) -> ApiResult<PagedData<ServiceItem>> {
        let key = QueryKey::Services { page };
        if let Some(hit) = self.cache.get_as(&key) {
            return Ok(hit);
        }
        let fetched = self.client.list_services(page).await?;
        self.cache.put(key, &fetched);
        Ok(fetched)
    }

    /// Fetch a cycle and reconcile its step state.
    ///
    /// The live current-step lookup is best-effort: a failure there degrades
    /// to the cycle's stored fields rather than failing the whole view.
    pub async fn resolved_cycle(
        &self,
        id: Uuid,
    ) -> ApiResult<Option<(TreatmentCycle, ResolvedSteps)>> {
        let Some(cycle) = self.treatment_cycle(id).await? else {
            return Ok(None);
        };

        let live_index = match self.cycle_current_step(id).await {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!("live current-step lookup failed for cycle {id}: {err}");
                None
            }
        };

        let resolved = match cycle.protocol() {
            Some(protocol) => resolve_steps(
                protocol,
                cycle.current_step.as_deref(),
                &cycle.completed_steps,
                live_index,
            ),
            None => {
                tracing::warn!(
                    "cycle {id} has unknown treatment type {:?}",
                    cycle.treatment_type
                );
                ResolvedSteps {
                    current_step: None,
                    completed_steps: Vec::new(),
                }
            }
        };

        Ok(Some((cycle, resolved)))
    }
}

// ============================================================================
// Mutations and their invalidation edges
// ============================================================================

impl QueryService {
    /// Schedule an appointment. Invalidates: appointments.
    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ApiResult<Appointment> {
        let appointment = self.client.create_appointment(request).await?;
        self.cache.invalidate_topic(Topic::Appointments);
        Ok(appointment)
    }

    /// Cancel an appointment. Invalidates: appointments, transactions (the
    /// backend may issue a refund record).
    pub async fn cancel_appointment(&self, id: Uuid, reason: String) -> ApiResult<()> {
        self.client.cancel_appointment(id, reason).await?;
        self.cache.invalidate_topic(Topic::Appointments);
        self.cache.invalidate_topic(Topic::Transactions);
        Ok(())
    }

    /// Advance a cycle to its next step. Invalidates: treatment cycles
    /// (including the live current-step snapshot).
    pub async fn advance_cycle_step(&self, id: Uuid) -> ApiResult<TreatmentCycle> {
        let cycle = self.client.advance_cycle_step(id).await?;
        self.cache.invalidate_topic(Topic::TreatmentCycles);
        Ok(cycle)
    }

    /// Submit a treatment plan. Invalidates: treatments, treatment cycles.
    pub async fn create_treatment_plan(
        &self,
        request: &CreateTreatmentPlanRequest,
    ) -> ApiResult<Treatment> {
        let treatment = self.client.create_treatment_plan(request).await?;
        self.cache.invalidate_topic(Topic::Treatments);
        self.cache.invalidate_topic(Topic::TreatmentCycles);
        Ok(treatment)
    }

    /// Author a medical record. Invalidates: medical records.
    pub async fn create_medical_record(
        &self,
        request: &CreateMedicalRecordRequest,
    ) -> ApiResult<MedicalRecord> {
        let record = self.client.create_medical_record(request).await?;
        self.cache.invalidate_topic(Topic::MedicalRecords);
        Ok(record)
    }

    /// Attach a prescription to a record. Invalidates: medical records.
    pub async fn create_prescription(
        &self,
        request: &CreatePrescriptionRequest,
    ) -> ApiResult<Prescription> {
        let prescription = self.client.create_prescription(request).await?;
        self.cache.invalidate_topic(Topic::MedicalRecords);
        Ok(prescription)
    }

    /// Order a service. Invalidates: appointments (service requests hang off
    /// appointment detail views), treatment cycles.
    pub async fn create_service_request(
        &self,
        request: &CreateServiceRequestRequest,
    ) -> ApiResult<ServiceRequest> {
        let service_request = self.client.create_service_request(request).await?;
        self.cache.invalidate_topic(Topic::Appointments);
        self.cache.invalidate_topic(Topic::TreatmentCycles);
        Ok(service_request)
    }

    /// Sign an agreement. Invalidates: agreements, treatment cycles (cycle
    /// creation is gated on the signatures).
    pub async fn sign_agreement(
        &self,
        agreement_id: Uuid,
        role: SignerRole,
    ) -> ApiResult<SignOutcome> {
        let outcome = self.client.sign_agreement(agreement_id, role).await?;
        self.cache.invalidate_topic(Topic::Agreements);
        self.cache.invalidate_topic(Topic::TreatmentCycles);
        Ok(outcome)
    }

    /// Record a transaction. Invalidates: transactions.
    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> ApiResult<Transaction> {
        let transaction = self.client.create_transaction(request).await?;
        self.cache.invalidate_topic(Topic::Transactions);
        Ok(transaction)
    }
}
