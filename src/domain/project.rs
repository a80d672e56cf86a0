use crate::domain::simulation::SimulationInput;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub simulations: Vec<SimulationInput>,
}
