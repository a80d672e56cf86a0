/// Demand and cost parameters of one product, as entered by the user.
///
/// `annual_demand` (D), `order_cost` (S) and `holding_cost` (H) must be
/// strictly positive. `current_lot_size` is the order quantity the company
/// uses today and is only used for the savings comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInput {
    pub product_name: String,
    pub annual_demand: f64,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub current_lot_size: Option<f64>,
}

impl SimulationInput {
    pub fn new(product_name: &str, annual_demand: f64, order_cost: f64, holding_cost: f64) -> Self {
        Self {
            product_name: product_name.to_string(),
            annual_demand,
            order_cost,
            holding_cost,
            current_lot_size: None,
        }
    }

    pub fn with_current_lot_size(mut self, current_lot_size: f64) -> Self {
        self.current_lot_size = Some(current_lot_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_input_has_no_baseline() {
        let input = SimulationInput::new("Widget", 1000.0, 100.0, 5.0);
        assert_eq!(input.product_name, "Widget");
        assert_eq!(input.current_lot_size, None);
    }

    #[test]
    fn with_current_lot_size_sets_baseline() {
        let input = SimulationInput::new("Widget", 1000.0, 100.0, 5.0).with_current_lot_size(50.0);
        assert_eq!(input.current_lot_size, Some(50.0));
    }
}
