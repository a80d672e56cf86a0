use clap::Parser;
use optistock::commands::base_commands::{CliArgs, Commands};
use optistock::commands::completions_cmd::completions_command;
use optistock::commands::plot_curve_cmd::plot_curve_command;
use optistock::commands::report_cmd::report_command;
use optistock::commands::simulate_cmd::simulate_command;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout only carries command output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::Report { .. } => report_command(cmd),
        cmd @ Commands::PlotCurve { .. } => plot_curve_command(cmd),
        cmd @ Commands::Completions { .. } => completions_command(cmd),
    }
}
