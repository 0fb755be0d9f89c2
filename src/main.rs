use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use invoice_desk::config::Config;
use invoice_desk::gateways::{HttpBackend, PersistenceGateway};
use invoice_desk::invoices::models::DraftState;
use invoice_desk::invoices::services::dashboard::{filter_rows, EXPORT_LINK};
use invoice_desk::invoices::{DashboardService, DraftEditor, InvoiceService};
use invoice_desk::settings::SettingsService;
use invoice_desk::signatures::SignatureCache;
use invoice_desk::vendors::VendorCache;

/// Command-line front end for the invoicing backend
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List stored invoices
    Invoices {
        /// Only show rows containing this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the next invoice number the backend will assign
    NextNumber,
    /// List vendors
    Vendors,
    /// List signatures
    Signatures,
    /// Show company settings and the default HST/GST number
    Settings,
    /// Submit an invoice draft stored as JSON
    Create {
        /// Path to the draft file
        draft: PathBuf,
    },
}

fn init_tracing(fallback_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| fallback_filter.into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before tracing so LOG_FORMAT from .env applies
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app.log_filter());
    config.validate().context("Configuration validation failed")?;

    tracing::info!(
        env = %config.app.env,
        backend = %config.backend.base_url(),
        "Starting Invoice Desk"
    );

    let backend = Arc::new(HttpBackend::new(&config.backend)?);
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Invoices { search } => {
            let dashboard = DashboardService::new(backend.clone());
            let (summary, rows) = dashboard.load(today).await?;
            println!(
                "Total invoices: {}  This month: {}",
                summary.total_count, summary.month_count
            );
            for row in filter_rows(&rows, search.as_deref().unwrap_or_default()) {
                println!(
                    "{:<10} {:<10} {:<10} {:<25} {:<8} {}",
                    row.invoice_number,
                    row.date,
                    row.invoice_type,
                    row.vendor,
                    row.status,
                    row.pdf_link.as_deref().unwrap_or_default()
                );
            }
            println!("Export: {}", EXPORT_LINK);
        }
        Commands::NextNumber => {
            println!("{}", backend.next_invoice_number().await?);
        }
        Commands::Vendors => {
            let mut cache = VendorCache::new();
            cache.refresh(backend.as_ref()).await?;
            for vendor in cache.all() {
                println!("{:>4}  {:<25} {:<30} {}", vendor.id, vendor.name, vendor.address, vendor.contact);
            }
        }
        Commands::Signatures => {
            let mut cache = SignatureCache::new();
            cache.refresh(backend.as_ref()).await?;
            let default_id = cache.default_signature().map(|s| s.id);
            for signature in cache.all() {
                let marker = if Some(signature.id) == default_id { "*" } else { " " };
                println!(
                    "{}{:>4}  {:<30} {}",
                    marker,
                    signature.id,
                    signature.label(),
                    signature.image_link()
                );
            }
        }
        Commands::Settings => {
            let settings = SettingsService::new(backend.clone());
            let company = settings.load().await?;
            let hst_gst = settings.hst_gst().await?;
            println!("{}", serde_json::to_string_pretty(&company)?);
            println!("HST/GST: {}", hst_gst.number().unwrap_or("(none)"));
        }
        Commands::Create { draft } => {
            let text = std::fs::read_to_string(&draft)
                .with_context(|| format!("Failed to read {}", draft.display()))?;
            let draft: DraftState = serde_json::from_str(&text)?;

            let mut service = InvoiceService::with_backend(backend.clone(), config.pricing);
            if let Err(e) = service.refresh_directories().await {
                tracing::warn!(error = %e, "Vendor/signature lists unavailable");
            }

            let editor = DraftEditor::new(draft, config.pricing);
            let totals = editor.totals();
            println!(
                "Subtotal {}  Tax {} ({})  Shipping {}  Total {}",
                totals.display_subtotal(),
                totals.display_tax(),
                totals.display_tax_rate(),
                totals.display_shipping(),
                totals.display_grand_total()
            );

            let persisted = service.submit(&editor).await?;
            println!(
                "Created invoice {}: {}",
                persisted.invoice_id,
                persisted.artifact_link()
            );
            println!(
                "Preview: {}",
                service.preview_url(editor.draft().template)?
            );
        }
    }

    Ok(())
}
