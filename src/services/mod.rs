pub mod cost_curve_plot;
pub mod eoq;
pub mod planner_config;
pub mod project_report;
pub mod simulation_types;
pub mod simulation_yaml;
