//! The order intake workflow.
//!
//! Ordering a service can carry a prescription and an up-front payment with
//! it. The three mutations run as one explicit linear sequence: create the
//! service request, then the prescription, then the transaction against the
//! created request. A failure aborts the chain; the error names the failed
//! step and the steps that had already committed. No compensation is
//! attempted — the backend owns reconciliation of partial intakes.

use crate::models::{
    CreatePrescriptionRequest, CreateServiceRequestRequest, CreateTransactionRequest, Prescription,
    ServiceRequest, Transaction, TransactionType,
};
use crate::query::QueryService;
use crate::ApiError;

/// Payment details attached to an order; the related entity is the service
/// request the chain creates.
#[derive(Clone, Debug)]
pub struct PaymentIntake {
    pub amount: f64,
    pub currency: String,
    pub description: Option<String>,
}

/// Everything one order submission carries.
#[derive(Clone, Debug)]
pub struct OrderIntake {
    pub service_request: CreateServiceRequestRequest,
    pub prescription: Option<CreatePrescriptionRequest>,
    pub payment: Option<PaymentIntake>,
}

/// What the chain created.
#[derive(Clone, Debug)]
pub struct OrderOutcome {
    pub service_request: ServiceRequest,
    pub prescription: Option<Prescription>,
    pub transaction: Option<Transaction>,
}

/// Failure of one step of the intake chain.
#[derive(Debug, thiserror::Error)]
#[error("order intake failed at step '{step}' (already committed: {committed:?}): {source}")]
pub struct OrderError {
    pub step: &'static str,
    pub committed: Vec<&'static str>,
    #[source]
    pub source: ApiError,
}

/// Run the order intake chain.
pub async fn submit_order(
    service: &QueryService,
    intake: OrderIntake,
) -> Result<OrderOutcome, OrderError> {
    let mut committed: Vec<&'static str> = Vec::new();

    tracing::info!("order intake: creating service request");
    let service_request = service
        .create_service_request(&intake.service_request)
        .await
        .map_err(|source| OrderError {
            step: "service-request",
            committed: committed.clone(),
            source,
        })?;
    committed.push("service-request");

    let prescription = match intake.prescription {
        Some(request) => {
            tracing::info!("order intake: creating prescription");
            let prescription =
                service
                    .create_prescription(&request)
                    .await
                    .map_err(|source| OrderError {
                        step: "prescription",
                        committed: committed.clone(),
                        source,
                    })?;
            committed.push("prescription");
            Some(prescription)
        }
        None => None,
    };

    let transaction = match intake.payment {
        Some(payment) => {
            tracing::info!("order intake: recording transaction");
            let request = CreateTransactionRequest {
                related_entity_type: "ServiceRequest".to_owned(),
                related_entity_id: service_request.id,
                amount: payment.amount,
                currency: payment.currency,
                transaction_type: TransactionType::Payment,
                description: payment.description,
            };
            let transaction =
                service
                    .create_transaction(&request)
                    .await
                    .map_err(|source| OrderError {
                        step: "transaction",
                        committed: committed.clone(),
                        source,
                    })?;
            Some(transaction)
        }
        None => None,
    };

    Ok(OrderOutcome {
        service_request,
        prescription,
        transaction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_error_reports_failed_step_and_committed_prefix() {
        let err = OrderError {
            step: "transaction",
            committed: vec!["service-request", "prescription"],
            source: ApiError::InvalidInput("amount must be positive".into()),
        };

        let rendered = err.to_string();
        assert!(rendered.contains("failed at step 'transaction'"));
        assert!(rendered.contains("service-request"));
        assert!(rendered.contains("prescription"));
    }
}
