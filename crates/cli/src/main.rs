//! MW back-office CLI.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (creates the local session record)
//! mw login -e luis@mw.com -p secret
//!
//! # Dashboard: counters, chart, recent products, AI summary
//! mw dashboard
//!
//! # Collections
//! mw list appointments
//! mw list products
//!
//! # Appointments
//! mw appointment add -c "Ana Pérez" -d 2026-09-01 -t 10:30 -s "Mantenimiento"
//! mw appointment set-status <id> completed
//! mw appointment delete <id>
//!
//! # Catalog (images are normalized before upload)
//! mw product add -n "Taladro" -p 1499.90 --image foto.png
//! mw product delete <id>
//!
//! # Sales and clients
//! mw sale add --product <id> --client <id> --payment transfer
//! mw client register -n "Visitante" -e v@mail.com --phone 555 --interest "Taladro"
//!
//! # Sellers (admin)
//! mw seller create -n "Luis" -e luis@mw.com --phone 555 --password secret
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this crate's job.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand, ValueEnum};
use mw_backoffice::AppState;
use mw_backoffice::stats::ReportKind;

mod commands;

#[derive(Parser)]
#[command(name = "mw")]
#[command(author, version, about = "MW Servicio Comercial back office")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist a local session
    Login {
        /// Seller email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Discard the local session
    Logout,
    /// Counters, appointment chart, recent products and the AI summary
    Dashboard {
        /// Which appointments the report section covers
        #[arg(long, value_enum, default_value = "all")]
        report: Report,
    },
    /// Print a collection
    List {
        #[arg(value_enum)]
        entity: Entity,
    },
    /// Manage appointments
    Appointment {
        #[command(subcommand)]
        action: AppointmentAction,
    },
    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Record and remove sales
    Sale {
        #[command(subcommand)]
        action: SaleAction,
    },
    /// Manage client records
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },
    /// Manage seller accounts
    Seller {
        #[command(subcommand)]
        action: SellerAction,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Entity {
    Appointments,
    Products,
    Sellers,
    Clients,
    Sales,
}

#[derive(Clone, Copy, ValueEnum)]
enum Report {
    All,
    Pending,
    Completed,
}

impl From<Report> for ReportKind {
    fn from(report: Report) -> Self {
        match report {
            Report::All => Self::All,
            Report::Pending => Self::Pending,
            Report::Completed => Self::Completed,
        }
    }
}

#[derive(Subcommand)]
enum AppointmentAction {
    /// Book an appointment (status starts as pending)
    Add {
        /// Client name (free text)
        #[arg(short, long)]
        client: String,

        /// Date, `YYYY-MM-DD`
        #[arg(short, long)]
        date: String,

        /// Time, `HH:MM`
        #[arg(short, long)]
        time: String,

        /// Service description
        #[arg(short, long)]
        service: String,

        /// Optional notes
        #[arg(long)]
        notes: Option<String>,

        /// Assign to a seller by id
        #[arg(long)]
        seller: Option<String>,
    },
    /// Move an appointment to a new status
    SetStatus {
        id: String,
        /// `pending`, `confirmed`, `completed` or `cancelled`
        status: String,
    },
    /// Delete an appointment
    Delete { id: String },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Add a catalog entry
    Add {
        #[arg(short, long)]
        name: String,

        /// Unit price
        #[arg(short, long)]
        price: String,

        /// Category (defaults to the general category)
        #[arg(short, long)]
        category: Option<String>,

        /// Sales copy; generated by the AI service when omitted
        #[arg(short, long)]
        description: Option<String>,

        /// Free-text context for the generated description (specs, draft
        /// copy); ignored when `--description` is given
        #[arg(long)]
        details: Option<String>,

        /// Image files, normalized before upload; repeatable
        #[arg(long)]
        image: Vec<std::path::PathBuf>,

        /// Units on hand (defaults to the quick-add stock)
        #[arg(long)]
        stock: Option<i32>,
    },
    /// Delete a catalog entry
    Delete { id: String },
}

#[derive(Subcommand)]
enum SaleAction {
    /// Record a sale
    Add {
        /// Product id
        #[arg(long)]
        product: String,

        /// Client id
        #[arg(long)]
        client: String,

        /// Seller id (defaults to the signed-in seller)
        #[arg(long)]
        seller: Option<String>,

        /// Sale date, `YYYY-MM-DD` (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// `cash`, `credit-card`, `debit-card`, `transfer` or `other`
        #[arg(long)]
        payment: String,

        /// Sale price (defaults to the product's catalog price)
        #[arg(long)]
        price: Option<String>,

        /// Extra costs added to the total
        #[arg(long, default_value = "0")]
        extra: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a sale
    Delete { id: String },
}

#[derive(Subcommand)]
enum ClientAction {
    /// Register a client; with `--interest` this is the anonymous
    /// storefront flow and needs no session
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Physical address
        #[arg(long)]
        address: Option<String>,

        /// Product the visitor asked about (storefront lead)
        #[arg(long, conflicts_with = "address")]
        interest: Option<String>,
    },
    /// Delete a client record
    Delete { id: String },
}

#[derive(Subcommand)]
enum SellerAction {
    /// Create a seller account
    Create {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        password: String,

        /// Create the account deactivated
        #[arg(long)]
        inactive: bool,
    },
    /// Patch a seller account; only the supplied fields change
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,

        /// Rotate the password
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete a seller account
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let state = AppState::from_env();

    if let Err(e) = run(cli, &state).await {
        tracing::error!("Command failed: {e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, state: &AppState) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Login { email, password } => commands::auth::login(state, &email, &password).await,
        Commands::Logout => {
            commands::auth::logout(state);
            Ok(())
        }
        Commands::Dashboard { report } => commands::dashboard::show(state, report.into()).await,
        Commands::List { entity } => match entity {
            Entity::Appointments => commands::list::appointments(state).await,
            Entity::Products => commands::list::products(state).await,
            Entity::Sellers => commands::list::sellers(state).await,
            Entity::Clients => commands::list::clients(state).await,
            Entity::Sales => commands::list::sales(state).await,
        },
        Commands::Appointment { action } => match action {
            AppointmentAction::Add {
                client,
                date,
                time,
                service,
                notes,
                seller,
            } => {
                commands::appointments::add(state, &client, &date, &time, &service, notes, seller)
                    .await
            }
            AppointmentAction::SetStatus { id, status } => {
                commands::appointments::set_status(state, &id, &status).await
            }
            AppointmentAction::Delete { id } => commands::appointments::delete(state, &id).await,
        },
        Commands::Product { action } => match action {
            ProductAction::Add {
                name,
                price,
                category,
                description,
                details,
                image,
                stock,
            } => {
                commands::products::add(
                    state,
                    &name,
                    &price,
                    category,
                    description,
                    details,
                    &image,
                    stock,
                )
                .await
            }
            ProductAction::Delete { id } => commands::products::delete(state, &id).await,
        },
        Commands::Sale { action } => match action {
            SaleAction::Add {
                product,
                client,
                seller,
                date,
                payment,
                price,
                extra,
                notes,
            } => {
                commands::sales::add(
                    state, &product, &client, seller, date, &payment, price, &extra, notes,
                )
                .await
            }
            SaleAction::Delete { id } => commands::sales::delete(state, &id).await,
        },
        Commands::Client { action } => match action {
            ClientAction::Register {
                name,
                email,
                phone,
                address,
                interest,
            } => commands::clients::register(state, &name, &email, &phone, address, interest).await,
            ClientAction::Delete { id } => commands::clients::delete(state, &id).await,
        },
        Commands::Seller { action } => match action {
            SellerAction::Create {
                name,
                email,
                phone,
                password,
                inactive,
            } => commands::sellers::create(state, &name, &email, &phone, password, !inactive).await,
            SellerAction::Update {
                id,
                name,
                email,
                phone,
                active,
                password,
            } => {
                commands::sellers::update(state, &id, name, email, phone, active, password).await
            }
            SellerAction::Delete { id } => commands::sellers::delete(state, &id).await,
        },
    }
}
