use crate::render::{run_batch, run_diagnose, run_industries, run_stats, BatchArgs, DiagnoseArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use smart_guarantee::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Smart Guarantee",
    about = "Diagnose small-business loan-guarantee approval odds from the command line or over HTTP",
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
    /// Score a single questionnaire and print the report
    Diagnose(DiagnoseArgs),
    /// Score every row of a questionnaire CSV export
    Batch(BatchArgs),
    /// List the industry catalog with baseline approval rates and fee adjustments
    Industries,
    /// Print the approval statistics dashboard
    Stats,
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
        Command::Diagnose(args) => run_diagnose(args),
        Command::Batch(args) => run_batch(args),
        Command::Industries => run_industries(),
        Command::Stats => run_stats(),
    }
}
