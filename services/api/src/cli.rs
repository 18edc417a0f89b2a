use crate::demo::{run_demo, run_growth, run_roi, DemoArgs, GrowthArgs, RoiArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use datapace::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Datapace Site Backend",
    about = "Run the Datapace marketing site backend or exercise its calculators from the command line",
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
    /// Compute an ROI estimate from the command line
    Roi(RoiArgs),
    /// Print a revenue growth projection table
    Growth(GrowthArgs),
    /// Run an offline walkthrough: calculators, lead intake, and the pipeline showcase
    Demo(DemoArgs),
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
        Command::Roi(args) => run_roi(args),
        Command::Growth(args) => run_growth(args),
        Command::Demo(args) => run_demo(args),
    }
}
