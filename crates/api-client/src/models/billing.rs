//! Transaction wire models and the page filter used by the admin screen.

use chrono::{DateTime, Utc};
use ferticare_core::display;
use ferticare_core::invoice::InvoiceData;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement status of a transaction. Transitions are driven by the payment
/// gateway callback on the backend, never by this client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Cancelled,
    Other(String),
}

impl TransactionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Failed => "Failed",
            TransactionStatus::Cancelled => "Cancelled",
            TransactionStatus::Other(status) => status,
        }
    }
}

impl From<String> for TransactionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => TransactionStatus::Pending,
            "Completed" => TransactionStatus::Completed,
            "Failed" => TransactionStatus::Failed,
            "Cancelled" => TransactionStatus::Cancelled,
            _ => TransactionStatus::Other(s),
        }
    }
}

impl From<TransactionStatus> for String {
    fn from(status: TransactionStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Other("Unknown".to_owned())
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Payment,
    Refund,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            TransactionType::Payment => "Payment",
            TransactionType::Refund => "Refund",
            TransactionType::Other(kind) => kind,
        }
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Payment" => TransactionType::Payment,
            "Refund" => TransactionType::Refund,
            _ => TransactionType::Other(s),
        }
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        kind.as_str().to_owned()
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        TransactionType::Other("Unknown".to_owned())
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A payment or refund record tied to a related entity.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default)]
    pub patient_name: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub related_entity_type: Option<String>,
    #[serde(default)]
    pub related_entity_id: Option<Uuid>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

impl Transaction {
    /// Map into the flat carrier the invoice renderer consumes.
    pub fn to_invoice(&self) -> InvoiceData {
        let related_entity = self.related_entity_type.as_deref().map(|kind| {
            match self.related_entity_id {
                Some(id) => format!("{kind} {id}"),
                None => kind.to_owned(),
            }
        });

        InvoiceData {
            transaction_id: self.id,
            created_at: self.created_at,
            patient_name: display::resolve_display_name([self.patient_name.as_deref()]),
            related_entity,
            description: self.description.clone(),
            amount: self.amount,
            currency: self.currency.clone(),
            transaction_type: self.transaction_type.as_str().to_owned(),
            status: self.status.as_str().to_owned(),
        }
    }
}

/// Payload for recording a transaction against a related entity.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    pub related_entity_type: String,
    pub related_entity_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub transaction_type: TransactionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Client-side filter applied to a fetched page of transactions.
#[derive(Clone, Debug, Default)]
pub struct TransactionFilter {
    pub status: Option<TransactionStatus>,
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let status_ok = self
            .status
            .as_ref()
            .is_none_or(|status| transaction.status == *status);
        let type_ok = self
            .transaction_type
            .as_ref()
            .is_none_or(|kind| transaction.transaction_type == *kind);
        status_ok && type_ok
    }

    /// Keep only the rows of the fetched page that match.
    pub fn apply<'a>(&self, rows: &'a [Transaction]) -> Vec<&'a Transaction> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_json;

    fn transaction(id_suffix: u8, status: &str, kind: &str) -> Transaction {
        decode_json(&format!(
            r#"{{
                "id": "00000000-0000-0000-0000-0000000000{id_suffix:02x}",
                "amount": 100.0,
                "transactionType": "{kind}",
                "status": "{status}"
            }}"#
        ))
        .expect("transaction should decode")
    }

    #[test]
    fn filter_keeps_only_matching_rows_of_the_page() {
        let page = vec![
            transaction(1, "Pending", "Payment"),
            transaction(2, "Completed", "Payment"),
            transaction(3, "Pending", "Refund"),
            transaction(4, "Pending", "Payment"),
        ];

        let filter = TransactionFilter {
            status: Some(TransactionStatus::Pending),
            transaction_type: Some(TransactionType::Payment),
        };
        let matching = filter.apply(&page);

        assert_eq!(matching.len(), 2);
        assert!(matching
            .iter()
            .all(|t| t.status == TransactionStatus::Pending
                && t.transaction_type == TransactionType::Payment));
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let page = vec![
            transaction(1, "Pending", "Payment"),
            transaction(2, "Failed", "Refund"),
        ];
        assert_eq!(TransactionFilter::default().apply(&page).len(), 2);
    }

    #[test]
    fn unknown_status_still_decodes_and_filters_as_other() {
        let row = transaction(5, "Chargeback", "Payment");
        assert_eq!(
            row.status,
            TransactionStatus::Other("Chargeback".to_owned())
        );

        let filter = TransactionFilter {
            status: Some(TransactionStatus::Pending),
            transaction_type: None,
        };
        assert!(!filter.matches(&row));
    }

    #[test]
    fn invoice_mapping_carries_related_entity_and_status() {
        let mut row = transaction(6, "Completed", "Payment");
        row.related_entity_type = Some("ServiceRequest".to_owned());
        row.related_entity_id = Some(Uuid::nil());
        row.patient_name = Some("  Lan Pham ".to_owned());

        let invoice = row.to_invoice();
        assert_eq!(invoice.patient_name.as_deref(), Some("Lan Pham"));
        assert_eq!(
            invoice.related_entity.as_deref(),
            Some("ServiceRequest 00000000-0000-0000-0000-000000000000")
        );
        assert_eq!(invoice.status, "Completed");
        assert_eq!(invoice.currency, "USD");
    }
}
