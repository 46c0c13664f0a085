//! Command-line access to a booking service.
//!
//! Configuration comes from `.env` / `BOOKING_API_*` variables, with
//! `--base-url` taking precedence. Results are printed as JSON; an absent
//! body prints `null`.

use anyhow::Context;
use booking_core::{
    BookingClient, BookingDates, BookingDetail, BookingFilter, BookingRecord, BookingTransport, ClientConfig,
    HttpTransport, OutcomeSink,
};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "booking-cli", about = "List, read and change bookings")]
struct Cli {
    /// Base URL of the booking service; overrides BOOKING_API_BASE_URL.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List booking ids, optionally filtered.
    List {
        #[arg(long)]
        firstname: Option<String>,
        #[arg(long)]
        lastname: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        checkin: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        checkout: Option<String>,
    },
    /// Show one booking.
    Get { id: u32 },
    /// Print only the status code of a booking lookup.
    Status { id: u32 },
    /// Create a booking.
    Create(DetailArgs),
    /// Replace the detail of an existing booking.
    Update {
        id: u32,
        #[command(flatten)]
        detail: DetailArgs,
    },
    /// Delete a booking.
    Delete { id: u32 },
}

#[derive(Debug, Args)]
struct DetailArgs {
    #[arg(long)]
    firstname: String,
    #[arg(long)]
    lastname: String,
    #[arg(long)]
    total_price: f64,
    #[arg(long)]
    deposit_paid: bool,
    #[arg(long)]
    checkin: String,
    #[arg(long)]
    checkout: String,
    #[arg(long)]
    additional_needs: Option<String>,
}

impl From<DetailArgs> for BookingDetail {
    fn from(args: DetailArgs) -> Self {
        BookingDetail {
            firstname: args.firstname,
            lastname: args.lastname,
            totalprice: args.total_price,
            depositpaid: args.deposit_paid,
            bookingdates: BookingDates::new(args.checkin, args.checkout),
            additionalneeds: args.additional_needs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("failed to load booking client configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    tracing::debug!(base_url = %config.base_url, "booking client configured");

    let client = BookingClient::new(HttpTransport::from_config(&config));

    let output = run(cli.command, &client)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Execute one subcommand and render its result as JSON.
fn run<T: BookingTransport, S: OutcomeSink>(command: Command, client: &BookingClient<T, S>) -> anyhow::Result<Value> {
    let output = match command {
        Command::List {
            firstname,
            lastname,
            checkin,
            checkout,
        } => {
            let filter = BookingFilter {
                firstname,
                lastname,
                checkin,
                checkout,
            };
            json!(client.list_booking_ids_filtered(&filter).context("listing bookings")?)
        }
        Command::Get { id } => json!(client.get_booking_detail(id).context("fetching booking")?),
        Command::Status { id } => json!(client
            .get_response_code_of_booking_get_request(id)
            .context("fetching booking status")?),
        Command::Create(detail) => json!(client
            .create_booking(&detail.into())
            .context("creating booking")?),
        Command::Update { id, detail } => {
            let record = BookingRecord {
                bookingid: id,
                booking: detail.into(),
            };
            json!(client.update_booking(&record).context("updating booking")?)
        }
        Command::Delete { id } => json!({ "deleted": client.delete_booking(id).context("deleting booking")? }),
    };
    Ok(output)
}
