use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct CostSample {
    pub quantity: f64,
    pub total_cost: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    pub near_optimum: bool,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub current_total_cost: Option<f64>,
    pub annual_savings: Option<f64>,
}

impl Baseline {
    pub fn absent() -> Self {
        Self {
            current_total_cost: None,
            annual_savings: None,
        }
    }
}

/// Second derivative of the total cost at the optimum.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct OptimalityCheck {
    pub second_derivative: f64,
    pub is_minimum: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub product_name: String,
    pub economic_order_quantity: f64,
    pub minimum_total_cost: f64,
    pub orders_per_year: u64,
    pub reorder_interval_days: u64,
    pub current_total_cost: Option<f64>,
    pub annual_savings: Option<f64>,
    pub savings_percentage: Option<f64>,
    pub optimality: OptimalityCheck,
    pub cost_curve: Vec<CostSample>,
}
