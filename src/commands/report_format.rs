use crate::services::project_report::ProjectReport;
use crate::services::simulation_types::SimulationResult;

pub fn format_simulation_result(result: &SimulationResult, currency: &str) -> String {
    let mut lines = Vec::new();
    lines.push("Simulation Result".to_string());
    lines.push(format!("Product: {}", result.product_name));
    lines.push(format!(
        "Economic order quantity: {:.2} units",
        result.economic_order_quantity
    ));
    lines.push(format!(
        "Minimum total cost: {}",
        format_money(result.minimum_total_cost, currency)
    ));
    lines.push(format!("Orders per year: {}", result.orders_per_year));
    lines.push(format!("Reorder interval: {} days", result.reorder_interval_days));
    lines.push(format!(
        "Current total cost: {}",
        format_optional_money(result.current_total_cost, currency)
    ));
    lines.push(format!(
        "Annual savings: {}",
        format_optional_money(result.annual_savings, currency)
    ));
    lines.push(format!(
        "Savings percentage: {}",
        format_optional_percentage(result.savings_percentage)
    ));
    lines.push(String::new());
    lines.push("Cost curve:".to_string());
    lines.push("Quantity | Ordering | Holding | Total".to_string());
    lines.push("---------|----------|---------|------".to_string());
    for sample in &result.cost_curve {
        let marker = if sample.near_optimum { " *" } else { "" };
        lines.push(format!(
            "{:.0} | {:.2} | {:.2} | {:.2}{marker}",
            sample.quantity, sample.ordering_cost, sample.holding_cost, sample.total_cost
        ));
    }

    lines.join("\n")
}

pub fn format_project_report(report: &ProjectReport, currency: &str) -> String {
    let mut lines = Vec::new();
    lines.push("Savings Report".to_string());
    lines.push(format!("Project: {}", report.project_name));
    if let Some(description) = &report.description {
        lines.push(format!("Description: {description}"));
    }
    lines.push(format!("Generated on: {}", report.generated_on));
    lines.push(format!("Simulations: {}", report.simulation_count));
    lines.push(format!(
        "Current total cost: {}",
        format_money(report.total_current_cost, currency)
    ));
    lines.push(format!(
        "Optimal total cost: {}",
        format_money(report.total_optimal_cost, currency)
    ));
    lines.push(format!(
        "Annual savings: {}",
        format_money(report.total_annual_savings, currency)
    ));
    lines.push(format!(
        "Savings percentage: {}",
        format_optional_percentage(report.savings_percentage)
    ));

    if !report.top_savings.is_empty() {
        lines.push(String::new());
        lines.push("Top savings:".to_string());
        lines.push("Product | Optimal lot | Annual savings".to_string());
        lines.push("--------|-------------|---------------".to_string());
        for item in &report.top_savings {
            lines.push(format!(
                "{} | {:.0} | {}",
                item.product_name,
                item.economic_order_quantity,
                format_money(item.annual_savings, currency)
            ));
        }
    }

    lines.join("\n")
}

fn format_money(value: f64, currency: &str) -> String {
    format!("{currency} {value:.2}")
}

fn format_optional_money(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(value) => format_money(value, currency),
        None => "n/a".to_string(),
    }
}

fn format_optional_percentage(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:.2}%"),
        None => "n/a".to_string(),
    }
}
