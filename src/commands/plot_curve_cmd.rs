use crate::commands::base_commands::Commands;
use crate::services::cost_curve_plot::write_cost_curve_png;
use crate::services::eoq::simulate;
use crate::services::planner_config::PlannerConfig;
use crate::services::simulation_yaml::load_simulation_from_yaml_file;

pub fn plot_curve_command(cmd: Commands) {
    if let Commands::PlotCurve {
        input,
        output,
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
        let result = match load_simulation_from_yaml_file(&input)
            .map_err(|e| e.to_string())
            .and_then(|sim| simulate(&sim, config.sample_count).map_err(|e| e.to_string()))
        {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Failed to simulate {input}: {e}");
                return;
            }
        };

        match write_cost_curve_png(&output, &result) {
            Ok(()) => println!("Cost curve written to {output}"),
            Err(e) => eprintln!("Failed to plot cost curve: {e:?}"),
        }
    }
}
