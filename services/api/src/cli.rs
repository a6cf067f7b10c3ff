use crate::commands::{run_assess, run_report, run_screen, AssessArgs, ReportArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tenant_risk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Tenant Risk Engine",
    about = "Score tenant behavior, screen applications, and serve the risk API",
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
    /// Assess a tenant from exported payment and maintenance ledgers
    Assess(AssessArgs),
    /// Generate a tenant behavior report from exported ledgers
    Report(ReportArgs),
    /// Screen an application with the configured screening provider
    Screen(ScreenArgs),
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
        Command::Assess(args) => run_assess(args),
        Command::Report(args) => run_report(args),
        Command::Screen(args) => run_screen(args),
    }
}
