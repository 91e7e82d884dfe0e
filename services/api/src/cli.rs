use crate::demo::{
    run_demo, run_project_list, run_project_show, run_vehicle_report, DemoArgs, ProjectListArgs,
    ProjectShowArgs, VehicleReportArgs,
};
use crate::server;
use campus_hub::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Campus Hub",
    about = "Browse student projects and score used-vehicle condition reports",
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
    /// Search and inspect the project board
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    /// Inspect vehicle condition reports
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand,
    },
    /// Walk through the project board and the demo vehicle report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProjectCommand {
    /// List projects matching a query and tag selection
    List(ProjectListArgs),
    /// Show the detail view of a single project
    Show(ProjectShowArgs),
}

#[derive(Subcommand, Debug)]
enum VehicleCommand {
    /// Print the scored assessment for a report
    Report(VehicleReportArgs),
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
        Command::Projects {
            command: ProjectCommand::List(args),
        } => run_project_list(args),
        Command::Projects {
            command: ProjectCommand::Show(args),
        } => run_project_show(args),
        Command::Vehicle {
            command: VehicleCommand::Report(args),
        } => run_vehicle_report(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
