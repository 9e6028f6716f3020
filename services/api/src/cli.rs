use crate::check::{run_applicant_check, run_booking_check, ApplicantCheckArgs, BookingCheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruiting_mock::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruiting Mock",
    about = "Serve or exercise the mock applicant lookup and interview booking endpoints",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the endpoint validation offline and print the response it would produce
    Check {
        #[command(subcommand)]
        command: CheckCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CheckCommand {
    /// Validate an applicant lookup payload
    Applicant(ApplicantCheckArgs),
    /// Validate an interview booking payload
    Booking(BookingCheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check {
            command: CheckCommand::Applicant(args),
        } => run_applicant_check(args),
        Command::Check {
            command: CheckCommand::Booking(args),
        } => run_booking_check(args),
    }
}
