//! Printable invoice rendering.
//!
//! Renders a transaction's fields into plain, printer-friendly text lines.
//! Nothing is persisted; the caller decides where the text goes.

use chrono::{DateTime, Utc};
use ferticare_types::NonEmptyText;
use uuid::Uuid;

/// Domain-level carrier for the fields an invoice shows.
///
/// The API crate maps its transaction wire model into this flat structure so
/// rendering stays independent of the backend schema.
#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceData {
    pub transaction_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub patient_name: Option<String>,
    /// What the payment was for, e.g. a service request or an appointment.
    pub related_entity: Option<String>,
    pub description: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub transaction_type: String,
    pub status: String,
}

/// Render an invoice as plain text lines.
pub fn render_invoice(clinic_name: &NonEmptyText, invoice: &InvoiceData) -> String {
    let mut lines = Vec::new();

    lines.push(clinic_name.as_str().to_owned());
    lines.push("=".repeat(clinic_name.as_str().len().max(24)));
    lines.push(format!("Invoice for transaction {}", invoice.transaction_id));

    if let Some(created_at) = invoice.created_at {
        lines.push(format!("Date:        {}", created_at.format("%Y-%m-%d %H:%M UTC")));
    }
    if let Some(patient_name) = invoice.patient_name.as_deref() {
        lines.push(format!("Patient:     {patient_name}"));
    }
    if let Some(related_entity) = invoice.related_entity.as_deref() {
        lines.push(format!("For:         {related_entity}"));
    }
    if let Some(description) = invoice.description.as_deref() {
        lines.push(format!("Description: {description}"));
    }

    lines.push(format!("Type:        {}", invoice.transaction_type));
    lines.push(format!(
        "Amount:      {:.2} {}",
        invoice.amount, invoice.currency
    ));
    lines.push(format!("Status:      {}", invoice.status.to_uppercase()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_invoice() -> InvoiceData {
        InvoiceData {
            transaction_id: Uuid::nil(),
            created_at: Some(Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()),
            patient_name: Some("Lan Pham".into()),
            related_entity: Some("Service request: semen analysis".into()),
            description: None,
            amount: 1_250.5,
            currency: "USD".into(),
            transaction_type: "Payment".into(),
            status: "Completed".into(),
        }
    }

    #[test]
    fn rendered_invoice_contains_the_material_fields() {
        let clinic = NonEmptyText::new("Sunrise Fertility").expect("clinic name should be valid");
        let text = render_invoice(&clinic, &sample_invoice());

        assert!(text.starts_with("Sunrise Fertility\n"));
        assert!(text.contains("2026-03-14 09:30 UTC"));
        assert!(text.contains("Patient:     Lan Pham"));
        assert!(text.contains("Amount:      1250.50 USD"));
        assert!(text.contains("Status:      COMPLETED"));
    }

    #[test]
    fn absent_optional_fields_are_omitted_rather_than_blank() {
        let clinic = NonEmptyText::new("Sunrise Fertility").expect("clinic name should be valid");
        let invoice = InvoiceData {
            created_at: None,
            patient_name: None,
            related_entity: None,
            ..sample_invoice()
        };
        let text = render_invoice(&clinic, &invoice);

        assert!(!text.contains("Patient:"));
        assert!(!text.contains("Date:"));
        assert!(text.contains("Type:        Payment"));
    }
}
