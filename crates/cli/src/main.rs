//! `ferticare` — console for the clinic backend.
//!
//! The receptionist, doctor and admin screens become subcommand groups.
//! Reads degrade quietly to empty views when the backend is unreachable;
//! mutations surface the backend's message and exit non-zero.

use anyhow::Context;
use api_client::envelope::{PageMeta, PagedData};
use api_client::models::{
    CreateAppointmentRequest, CreateMedicalRecordRequest, CreatePrescriptionRequest,
    CreateServiceRequestRequest, CreateTreatmentPlanRequest, PlannedPhaseRequest,
    PrescriptionItemRequest, TransactionFilter, TransactionStatus, TransactionType,
};
use api_client::workflow::{submit_order, OrderIntake, PaymentIntake};
use api_client::{ApiClient, ApiResult, QueryService};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use ferticare_core::agreement::{SignOutcome, SignerRole};
use ferticare_core::badge::badge_for_status;
use ferticare_core::config::{api_base_url_from_env_value, page_size_from_env_value};
use ferticare_core::invoice::render_invoice;
use ferticare_core::phases::generate_phases;
use ferticare_core::timeline::project_timeline;
use ferticare_core::{CoreConfig, TreatmentType};
use ferticare_types::NonEmptyText;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "ferticare")]
#[command(about = "FertiCare clinic operations console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Receptionist: appointment scheduling
    Appointments {
        #[command(subcommand)]
        command: AppointmentsCmd,
    },
    /// Receptionist: patient lookup
    Patients {
        #[command(subcommand)]
        command: PatientsCmd,
    },
    /// Doctor: treatment cycles and timelines
    Cycles {
        #[command(subcommand)]
        command: CyclesCmd,
    },
    /// Doctor: treatment plan suggestions
    Plans {
        #[command(subcommand)]
        command: PlansCmd,
    },
    /// Doctor: treatment agreements
    Agreements {
        #[command(subcommand)]
        command: AgreementsCmd,
    },
    /// Doctor: medical records
    Records {
        #[command(subcommand)]
        command: RecordsCmd,
    },
    /// Admin: payment transactions
    Transactions {
        #[command(subcommand)]
        command: TransactionsCmd,
    },
    /// Doctor: service orders with optional prescription and payment
    Orders {
        #[command(subcommand)]
        command: OrdersCmd,
    },
}

#[derive(Subcommand)]
enum AppointmentsCmd {
    /// List a page of appointments
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one appointment
    Show { id: Uuid },
    /// Schedule an appointment
    Create {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        doctor: Uuid,
        /// Scheduled time, RFC 3339 (e.g. 2026-03-14T09:30:00Z)
        #[arg(long)]
        at: DateTime<Utc>,
        #[arg(long)]
        duration_minutes: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Cancel an appointment
    Cancel {
        id: Uuid,
        #[arg(long)]
        reason: NonEmptyText,
    },
}

#[derive(Subcommand)]
enum PatientsCmd {
    /// List a page of patients
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one patient
    Show { id: Uuid },
}

#[derive(Subcommand)]
enum CyclesCmd {
    /// Show a treatment cycle's fields
    Show { id: Uuid },
    /// Render a cycle's step timeline
    Timeline { id: Uuid },
    /// Advance a cycle to its next step
    Advance { id: Uuid },
}

#[derive(Subcommand)]
enum PlansCmd {
    /// Generate the suggested phase schedule for a protocol
    Suggest {
        /// Treatment protocol (IVF or IUI)
        #[arg(long)]
        treatment: TreatmentType,
        /// First day of the plan (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
    },
    /// Generate a phase schedule and submit it as a treatment plan
    Submit {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        treatment: TreatmentType,
        #[arg(long)]
        start: NaiveDate,
    },
    /// List the clinic's treatment offerings
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[derive(Subcommand)]
enum AgreementsCmd {
    /// Show the agreement attached to a treatment cycle
    Show { cycle_id: Uuid },
    /// Sign an agreement as doctor or patient
    Sign {
        agreement_id: Uuid,
        #[arg(long)]
        role: SignerRole,
    },
}

#[derive(Subcommand)]
enum RecordsCmd {
    /// Show one medical record
    Show { id: Uuid },
    /// List a patient's medical records
    List {
        #[arg(long)]
        patient: Uuid,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Author a medical record
    Create {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        appointment: Option<Uuid>,
        #[arg(long)]
        title: NonEmptyText,
        #[arg(long)]
        diagnosis: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum TransactionsCmd {
    /// List a page of transactions, optionally filtered
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Keep only rows with this status (e.g. Pending)
        #[arg(long)]
        status: Option<String>,
        /// Keep only rows of this type (Payment or Refund)
        #[arg(long = "type")]
        transaction_type: Option<String>,
    },
    /// Show one transaction
    Show { id: Uuid },
    /// Render a transaction as a printable invoice
    PrintInvoice { id: Uuid },
}

#[derive(Subcommand)]
enum OrdersCmd {
    /// List the orderable clinical services
    Services {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List the pharmacy's medicines
    Medicines {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Create a service request, optionally with prescription and payment
    Create {
        #[arg(long)]
        service: Uuid,
        #[arg(long)]
        appointment: Option<Uuid>,
        #[arg(long)]
        cycle: Option<Uuid>,
        #[arg(long)]
        notes: Option<String>,
        /// Medical record to attach a prescription to
        #[arg(long, requires = "medicine")]
        record: Option<Uuid>,
        #[arg(long, requires = "record")]
        medicine: Option<Uuid>,
        #[arg(long, default_value = "as prescribed")]
        dosage: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        /// Up-front payment amount
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long, default_value = "USD")]
        currency: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ferticare=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CoreConfig::new(
        api_base_url_from_env_value(std::env::var("FERTICARE_API_URL").ok())?,
        NonEmptyText::new(
            std::env::var("FERTICARE_CLINIC_NAME").unwrap_or_else(|_| "FertiCare Clinic".into()),
        )
        .context("FERTICARE_CLINIC_NAME must not be blank")?,
        page_size_from_env_value(std::env::var("FERTICARE_PAGE_SIZE").ok())?,
    )?;

    tracing::info!("++ FertiCare console against {}", config.api_base_url());

    let service = QueryService::new(ApiClient::new(&config)?);
    let cli = Cli::parse();

    match cli.command {
        Commands::Appointments { command } => run_appointments(&service, command).await,
        Commands::Patients { command } => run_patients(&service, command).await,
        Commands::Cycles { command } => run_cycles(&service, command).await,
        Commands::Plans { command } => run_plans(&service, command).await,
        Commands::Agreements { command } => run_agreements(&service, command).await,
        Commands::Records { command } => run_records(&service, command).await,
        Commands::Transactions { command } => run_transactions(&service, &config, command).await,
        Commands::Orders { command } => run_orders(&service, command).await,
    }
}

/// Quiet-fallback policy for list screens: log the failure and render an
/// empty page.
fn page_or_empty<T>(result: ApiResult<PagedData<T>>, what: &str) -> PagedData<T> {
    match result {
        Ok(page) => page,
        Err(err) => {
            tracing::warn!("failed to load {what}: {err}");
            PagedData {
                data: Vec::new(),
                meta_data: PageMeta::default(),
            }
        }
    }
}

fn print_page_footer(meta: &PageMeta) {
    if meta.total_pages > 0 {
        println!(
            "-- page {}/{} ({} total)",
            meta.page_number, meta.total_pages, meta.total_count
        );
    }
}

/// A coloured terminal bullet for a domain status, using the badge palette.
fn status_bullet(status: &str) -> String {
    let badge = badge_for_status(status);
    let hex = badge.dot.trim_start_matches('#');
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return format!("\x1b[38;2;{r};{g};{b}m●\x1b[0m");
        }
    }
    "●".to_owned()
}

fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-",
    }
}

async fn run_appointments(service: &QueryService, command: AppointmentsCmd) -> anyhow::Result<()> {
    match command {
        AppointmentsCmd::List { page } => {
            let page = page_or_empty(service.appointments_page(page).await, "appointments");
            if page.data.is_empty() {
                println!("No appointments found.");
            }
            for appointment in &page.data {
                println!(
                    "{} {}  {}  patient: {}  doctor: {}  [{}]",
                    status_bullet(appointment.status.as_str()),
                    appointment.id,
                    appointment
                        .scheduled_at
                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "unscheduled".into()),
                    or_dash(appointment.patient_name.as_deref()),
                    or_dash(appointment.doctor_name.as_deref()),
                    appointment.status
                );
            }
            print_page_footer(&page.meta_data);
        }
        AppointmentsCmd::Show { id } => match service.appointment(id).await {
            Ok(Some(appointment)) => {
                println!("Appointment {}", appointment.id);
                println!("  status:   {}", appointment.status);
                println!(
                    "  at:       {}",
                    appointment
                        .scheduled_at
                        .map(|at| at.to_rfc3339())
                        .unwrap_or_else(|| "-".into())
                );
                println!("  patient:  {}", or_dash(appointment.patient_name.as_deref()));
                println!("  doctor:   {}", or_dash(appointment.doctor_name.as_deref()));
                println!("  notes:    {}", or_dash(appointment.notes.as_deref()));
            }
            Ok(None) => println!("No appointment with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load appointment {id}: {err}");
                println!("No appointment with id {id}.");
            }
        },
        AppointmentsCmd::Create {
            patient,
            doctor,
            at,
            duration_minutes,
            notes,
        } => {
            let request = CreateAppointmentRequest {
                patient_id: patient,
                doctor_id: doctor,
                scheduled_at: at,
                duration_minutes,
                notes,
            };
            let appointment = service
                .create_appointment(&request)
                .await
                .context("failed to save appointment")?;
            println!("Created appointment {}", appointment.id);
        }
        AppointmentsCmd::Cancel { id, reason } => {
            service
                .cancel_appointment(id, reason.into_inner())
                .await
                .context("failed to cancel appointment")?;
            println!("Cancelled appointment {id}");
        }
    }
    Ok(())
}

async fn run_patients(service: &QueryService, command: PatientsCmd) -> anyhow::Result<()> {
    match command {
        PatientsCmd::List { page } => {
            let page = page_or_empty(service.patients_page(page).await, "patients");
            if page.data.is_empty() {
                println!("No patients found.");
            }
            for patient in &page.data {
                println!(
                    "{}  {}  born: {}",
                    patient.id,
                    patient.display_name().unwrap_or_else(|| "-".into()),
                    patient
                        .date_of_birth
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into())
                );
            }
            print_page_footer(&page.meta_data);
        }
        PatientsCmd::Show { id } => match service.patient(id).await {
            Ok(Some(patient)) => {
                println!("Patient {}", patient.id);
                println!(
                    "  name:   {}",
                    patient.display_name().unwrap_or_else(|| "-".into())
                );
                println!(
                    "  born:   {}",
                    patient
                        .date_of_birth
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into())
                );
                println!("  phone:  {}", or_dash(patient.phone_number.as_deref()));
                println!("  email:  {}", or_dash(patient.email.as_deref()));
            }
            Ok(None) => println!("No patient with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load patient {id}: {err}");
                println!("No patient with id {id}.");
            }
        },
    }
    Ok(())
}

async fn run_cycles(service: &QueryService, command: CyclesCmd) -> anyhow::Result<()> {
    match command {
        CyclesCmd::Show { id } => match service.treatment_cycle(id).await {
            Ok(Some(cycle)) => {
                println!("Treatment cycle {}", cycle.id);
                println!("  protocol: {}", or_dash(cycle.treatment_type.as_deref()));
                println!("  status:   {}", cycle.status);
                println!("  patient:  {}", or_dash(cycle.patient_name.as_deref()));
                println!(
                    "  start:    {}",
                    cycle
                        .start_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".into())
                );
                println!("  notes:    {}", or_dash(cycle.notes.as_deref()));
            }
            Ok(None) => println!("No treatment cycle with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load cycle {id}: {err}");
                println!("No treatment cycle with id {id}.");
            }
        },
        CyclesCmd::Timeline { id } => match service.resolved_cycle(id).await {
            Ok(Some((cycle, resolved))) => {
                let Some(protocol) = cycle.protocol() else {
                    println!(
                        "Cycle {id} has no recognisable protocol ({}).",
                        or_dash(cycle.treatment_type.as_deref())
                    );
                    return Ok(());
                };
                println!(
                    "{} timeline for {} ({})",
                    protocol,
                    or_dash(cycle.patient_name.as_deref()),
                    cycle.status
                );
                for row in project_timeline(protocol, &resolved) {
                    println!(
                        "  {} {:<28} {:<12} {}",
                        status_bullet(row.status.as_status_str()),
                        row.label,
                        format!("[{:?}]", row.status).to_lowercase(),
                        row.description
                    );
                }
            }
            Ok(None) => println!("No treatment cycle with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load cycle {id}: {err}");
                println!("No treatment cycle with id {id}.");
            }
        },
        CyclesCmd::Advance { id } => {
            let cycle = service
                .advance_cycle_step(id)
                .await
                .context("failed to advance cycle step")?;
            println!(
                "Advanced cycle {} to step {}",
                cycle.id,
                or_dash(cycle.current_step.as_deref())
            );
        }
    }
    Ok(())
}

async fn run_plans(service: &QueryService, command: PlansCmd) -> anyhow::Result<()> {
    match command {
        PlansCmd::Suggest { treatment, start } => {
            println!("Suggested {treatment} plan starting {start}:");
            for phase in generate_phases(treatment, start) {
                println!(
                    "  {:<28} {} .. {}  ({} days)",
                    phase.label, phase.start_date, phase.end_date, phase.duration_days
                );
            }
        }
        PlansCmd::Submit {
            patient,
            treatment,
            start,
        } => {
            let phases = generate_phases(treatment, start);
            let request = CreateTreatmentPlanRequest {
                patient_id: patient,
                treatment_type: treatment,
                start_date: start,
                phases: phases.iter().map(PlannedPhaseRequest::from).collect(),
            };
            let plan = service
                .create_treatment_plan(&request)
                .await
                .context("failed to submit treatment plan")?;
            println!(
                "Submitted {} plan {} ({} phases)",
                treatment,
                plan.id,
                phases.len()
            );
        }
        PlansCmd::List { page } => {
            let page = page_or_empty(service.treatments_page(page).await, "treatments");
            if page.data.is_empty() {
                println!("No treatments found.");
            }
            for treatment in &page.data {
                println!(
                    "{}  {:<10} {}  {}",
                    treatment.id,
                    or_dash(treatment.treatment_type.as_deref()),
                    or_dash(treatment.name.as_deref()),
                    treatment
                        .price
                        .map(|price| format!("{price:.2}"))
                        .unwrap_or_else(|| "-".into())
                );
            }
            print_page_footer(&page.meta_data);
        }
    }
    Ok(())
}

async fn run_agreements(service: &QueryService, command: AgreementsCmd) -> anyhow::Result<()> {
    match command {
        AgreementsCmd::Show { cycle_id } => match service.agreement(cycle_id).await {
            Ok(Some(agreement)) => {
                let signatures = agreement.signatures();
                println!("Agreement {} for cycle {}", agreement.id, cycle_id);
                println!(
                    "  doctor:  {} ({})",
                    if signatures.is_signed(SignerRole::Doctor) { "signed" } else { "unsigned" },
                    or_dash(agreement.doctor_name.as_deref())
                );
                println!(
                    "  patient: {} ({})",
                    if signatures.is_signed(SignerRole::Patient) { "signed" } else { "unsigned" },
                    or_dash(agreement.patient_name.as_deref())
                );
                if signatures.is_fully_signed() {
                    println!("  fully signed - cycle creation is unblocked");
                } else {
                    println!("  awaiting signatures - cycle creation is blocked");
                }
            }
            Ok(None) => println!("No agreement for cycle {cycle_id}."),
            Err(err) => {
                tracing::warn!("failed to load agreement for cycle {cycle_id}: {err}");
                println!("No agreement for cycle {cycle_id}.");
            }
        },
        AgreementsCmd::Sign { agreement_id, role } => {
            let outcome = service
                .sign_agreement(agreement_id, role)
                .await
                .context("failed to sign agreement")?;
            match outcome {
                SignOutcome::Signed => println!("Signed agreement {agreement_id} as {role}"),
                SignOutcome::AlreadySigned => {
                    println!("Agreement {agreement_id} was already signed as {role}")
                }
            }
        }
    }
    Ok(())
}

async fn run_records(service: &QueryService, command: RecordsCmd) -> anyhow::Result<()> {
    match command {
        RecordsCmd::Show { id } => match service.medical_record(id).await {
            Ok(Some(record)) => {
                println!("Medical record {}", record.id);
                println!("  title:     {}", or_dash(record.title.as_deref()));
                println!("  diagnosis: {}", or_dash(record.diagnosis.as_deref()));
                println!("  notes:     {}", or_dash(record.notes.as_deref()));
                println!("  doctor:    {}", or_dash(record.doctor_name.as_deref()));
                println!(
                    "  recorded:  {}",
                    record
                        .recorded_at
                        .map(|at| at.to_rfc3339())
                        .unwrap_or_else(|| "-".into())
                );
            }
            Ok(None) => println!("No medical record with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load medical record {id}: {err}");
                println!("No medical record with id {id}.");
            }
        },
        RecordsCmd::List { patient, page } => {
            let page = page_or_empty(
                service.medical_records_page(patient, page).await,
                "medical records",
            );
            if page.data.is_empty() {
                println!("No medical records found.");
            }
            for record in &page.data {
                println!(
                    "{}  {}  {}  by {}",
                    record.id,
                    record
                        .recorded_at
                        .map(|at| at.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| "-".into()),
                    or_dash(record.title.as_deref()),
                    or_dash(record.doctor_name.as_deref())
                );
            }
            print_page_footer(&page.meta_data);
        }
        RecordsCmd::Create {
            patient,
            appointment,
            title,
            diagnosis,
            notes,
        } => {
            let request = CreateMedicalRecordRequest {
                patient_id: patient,
                appointment_id: appointment,
                title: title.into_inner(),
                diagnosis,
                notes,
            };
            let record = service
                .create_medical_record(&request)
                .await
                .context("failed to save medical record")?;
            println!("Created medical record {}", record.id);
        }
    }
    Ok(())
}

async fn run_transactions(
    service: &QueryService,
    config: &CoreConfig,
    command: TransactionsCmd,
) -> anyhow::Result<()> {
    match command {
        TransactionsCmd::List {
            page,
            status,
            transaction_type,
        } => {
            let filter = TransactionFilter {
                status: status.map(TransactionStatus::from),
                transaction_type: transaction_type.map(TransactionType::from),
            };
            let page = page_or_empty(service.transactions_page(page).await, "transactions");
            let rows = filter.apply(&page.data);
            if rows.is_empty() {
                println!("No transactions found.");
            }
            for transaction in rows {
                println!(
                    "{} {}  {:>10.2} {}  {}  {}  {}",
                    status_bullet(transaction.status.as_str()),
                    transaction.id,
                    transaction.amount,
                    transaction.currency,
                    transaction.transaction_type,
                    transaction.status,
                    or_dash(transaction.patient_name.as_deref())
                );
            }
            print_page_footer(&page.meta_data);
        }
        TransactionsCmd::Show { id } => match service.transaction(id).await {
            Ok(Some(transaction)) => {
                println!("Transaction {}", transaction.id);
                println!("  type:    {}", transaction.transaction_type);
                println!("  status:  {}", transaction.status);
                println!(
                    "  amount:  {:.2} {}",
                    transaction.amount, transaction.currency
                );
                println!(
                    "  for:     {}",
                    or_dash(transaction.related_entity_type.as_deref())
                );
            }
            Ok(None) => println!("No transaction with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load transaction {id}: {err}");
                println!("No transaction with id {id}.");
            }
        },
        TransactionsCmd::PrintInvoice { id } => match service.transaction(id).await {
            Ok(Some(transaction)) => {
                println!("{}", render_invoice(config.clinic_name(), &transaction.to_invoice()));
            }
            Ok(None) => println!("No transaction with id {id}."),
            Err(err) => {
                tracing::warn!("failed to load transaction {id}: {err}");
                println!("No transaction with id {id}.");
            }
        },
    }
    Ok(())
}

async fn run_orders(service: &QueryService, command: OrdersCmd) -> anyhow::Result<()> {
    match command {
        OrdersCmd::Services { page } => {
            let page = page_or_empty(service.services_page(page).await, "services");
            if page.data.is_empty() {
                println!("No services found.");
            }
            for item in &page.data {
                println!(
                    "{}  {:<32} {}",
                    item.id,
                    or_dash(item.name.as_deref()),
                    item.price
                        .map(|price| format!("{price:.2}"))
                        .unwrap_or_else(|| "-".into())
                );
            }
            print_page_footer(&page.meta_data);
        }
        OrdersCmd::Medicines { page } => {
            let page = page_or_empty(service.medicines_page(page).await, "medicines");
            if page.data.is_empty() {
                println!("No medicines found.");
            }
            for medicine in &page.data {
                println!(
                    "{}  {:<32} {}  {}",
                    medicine.id,
                    or_dash(medicine.name.as_deref()),
                    or_dash(medicine.unit.as_deref()),
                    medicine
                        .price
                        .map(|price| format!("{price:.2}"))
                        .unwrap_or_else(|| "-".into())
                );
            }
            print_page_footer(&page.meta_data);
        }
        OrdersCmd::Create {
            service: service_id,
            appointment,
            cycle,
            notes,
            record,
            medicine,
            dosage,
            quantity,
            amount,
            currency,
        } => {
            let prescription = match (record, medicine) {
                (Some(medical_record_id), Some(medicine_id)) => Some(CreatePrescriptionRequest {
                    medical_record_id,
                    items: vec![PrescriptionItemRequest {
                        medicine_id,
                        dosage,
                        quantity,
                    }],
                    notes: None,
                }),
                _ => None,
            };

            let intake = OrderIntake {
                service_request: CreateServiceRequestRequest {
                    service_id,
                    appointment_id: appointment,
                    treatment_cycle_id: cycle,
                    notes,
                },
                prescription,
                payment: amount.map(|amount| PaymentIntake {
                    amount,
                    currency,
                    description: Some("service order payment".to_owned()),
                }),
            };

            let outcome = submit_order(service, intake)
                .await
                .context("order intake aborted")?;
            println!("Created service request {}", outcome.service_request.id);
            if let Some(prescription) = outcome.prescription {
                println!("Created prescription {}", prescription.id);
            }
            if let Some(transaction) = outcome.transaction {
                println!(
                    "Recorded {} transaction {} ({})",
                    transaction.transaction_type, transaction.id, transaction.status
                );
            }
        }
    }
    Ok(())
}
