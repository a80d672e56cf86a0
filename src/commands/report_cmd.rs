use chrono::NaiveDate;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_project_report;
use crate::services::planner_config::PlannerConfig;
use crate::services::project_report::report_from_yaml_file;
use crate::services::simulation_yaml::serialize_result_to_yaml;

pub fn report_command(cmd: Commands) {
    if let Commands::Report {
        input,
        output,
        date,
        config,
    } = cmd
    {
        let config = match PlannerConfig::load(config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load planner config: {e:?}");
                return;
            }
        };
        let generated_on = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                eprintln!("Failed to build report: invalid date {date}");
                return;
            }
        };

        let report = match report_from_yaml_file(&input, generated_on, config.sample_count) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to build report: {e}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_result_to_yaml(&mut buffer, &report) {
            eprintln!("Failed to serialize report: {e:?}");
            return;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write report: {e:?}");
        } else {
            println!("{}", format_project_report(&report, &config.currency));
            println!("Report written to {output}");
        }
    }
}
