use crate::domain::project::Project;
use crate::domain::simulation::SimulationInput;

pub fn on_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_project(simulations: Vec<SimulationInput>) -> Project {
    Project {
        name: "Test project".to_string(),
        description: None,
        simulations,
    }
}
