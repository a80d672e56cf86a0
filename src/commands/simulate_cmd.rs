use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_simulation_result;
use crate::domain::simulation::SimulationInput;
use crate::services::cost_curve_plot::write_cost_curve_png;
use crate::services::eoq::simulate;
use crate::services::planner_config::PlannerConfig;
use crate::services::simulation_yaml::serialize_result_to_yaml;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        product,
        demand,
        order_cost,
        holding_cost,
        current_lot_size,
        output,
        chart,
        json,
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

        let input = SimulationInput {
            product_name: product,
            annual_demand: demand,
            order_cost,
            holding_cost,
            current_lot_size,
        };
        let result = match simulate(&input, config.sample_count) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate: {e}");
                return;
            }
        };
        info!(product = %result.product_name, eoq = result.economic_order_quantity, "simulation finished");

        if json {
            match serde_json::to_string_pretty(&result) {
                Ok(contents) => println!("{contents}"),
                Err(e) => {
                    eprintln!("Failed to serialize simulation result: {e:?}");
                    return;
                }
            }
        } else {
            println!("{}", format_simulation_result(&result, &config.currency));
        }

        if let Some(output) = output {
            let mut buffer = Vec::new();
            if let Err(e) = serialize_result_to_yaml(&mut buffer, &result) {
                eprintln!("Failed to serialize simulation result: {e:?}");
                return;
            }
            if let Err(e) = std::fs::write(&output, buffer) {
                eprintln!("Failed to write simulation output: {e:?}");
            } else {
                report_status(json, &format!("Simulation result written to {output}"));
            }
        }

        if let Some(chart) = chart {
            match write_cost_curve_png(&chart, &result) {
                Ok(()) => report_status(json, &format!("Cost curve written to {chart}")),
                Err(e) => eprintln!("Failed to plot cost curve: {e:?}"),
            }
        }
    }
}

// Keeps stdout parseable when it carries JSON.
fn report_status(json: bool, message: &str) {
    if json {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}
