use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the economic order quantity for one product
    Simulate {
        /// Product name
        #[arg(short, long)]
        product: String,
        /// Annual demand in units (D)
        #[arg(short, long)]
        demand: f64,
        /// Cost per order (S)
        #[arg(short = 's', long)]
        order_cost: f64,
        /// Holding cost per unit per year (H)
        #[arg(short = 'k', long)]
        holding_cost: f64,
        /// Lot size currently ordered, used for the savings comparison
        #[arg(short, long)]
        current_lot_size: Option<f64>,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
        /// Optional output PNG file for the cost curve
        #[arg(long)]
        chart: Option<String>,
        /// Print the result as JSON instead of the text summary
        #[arg(long)]
        json: bool,
        /// Optional planner config YAML
        #[arg(long)]
        config: Option<String>,
    },
    /// Build the savings report of a project YAML file
    Report {
        /// Project YAML file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Report date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_report_date())]
        date: String,
        /// Optional planner config YAML
        #[arg(long)]
        config: Option<String>,
    },
    /// Plot the cost curve of a simulation YAML file into a PNG chart
    PlotCurve {
        /// Simulation YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Optional planner config YAML
        #[arg(long)]
        config: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_report_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
