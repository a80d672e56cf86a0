use plotters::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::services::simulation_types::SimulationResult;

#[derive(Error, Debug)]
pub enum CostCurvePlotError {
    #[error("cost curve has no samples")]
    EmptyCurve,
    #[error("failed to render cost curve: {0}")]
    Render(String),
}

pub fn write_cost_curve_png(
    output_path: &str,
    result: &SimulationResult,
) -> Result<(), CostCurvePlotError> {
    if result.cost_curve.is_empty() {
        return Err(CostCurvePlotError::EmptyCurve);
    }
    debug!(output_path, samples = result.cost_curve.len(), "rendering cost curve");
    render_cost_curve_png(output_path, result)
}

fn render_cost_curve_png(
    output_path: &str,
    result: &SimulationResult,
) -> Result<(), CostCurvePlotError> {
    let curve = &result.cost_curve;
    let min_x = curve.first().map(|s| s.quantity).unwrap_or(0.0);
    let max_x = curve
        .last()
        .map(|s| s.quantity)
        .unwrap_or(1.0)
        .max(min_x + 1.0);
    let max_y = curve
        .iter()
        .map(|s| s.total_cost.max(s.ordering_cost).max(s.holding_cost))
        .fold(0.0_f64, f64::max)
        * 1.05;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;

    let caption = format!("Cost Curve - {}", result.product_name);
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(min_x..max_x, 0.0..max_y.max(1.0))
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Order quantity")
        .y_desc("Annual cost")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|value| format!("{value:.0}"))
        .y_label_formatter(&|value| format!("{value:.0}"))
        .draw()
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;

    let total_color = RGBColor(30, 122, 204);
    let ordering_color = RGBColor(230, 126, 34);
    let holding_color = RGBColor(39, 174, 96);

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|s| (s.quantity, s.total_cost)),
            total_color.stroke_width(3),
        ))
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?
        .label("Total cost")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &total_color));

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|s| (s.quantity, s.ordering_cost)),
            ordering_color.stroke_width(2),
        ))
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?
        .label("Ordering cost")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &ordering_color));

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|s| (s.quantity, s.holding_cost)),
            holding_color.stroke_width(2),
        ))
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?
        .label("Holding cost")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &holding_color));

    chart
        .draw_series(
            curve
                .iter()
                .filter(|s| s.near_optimum)
                .map(|s| Circle::new((s.quantity, s.total_cost), 5, total_color.filled())),
        )
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;

    chart
        .draw_series(std::iter::once(Circle::new(
            (result.economic_order_quantity, result.minimum_total_cost),
            7,
            RED.filled(),
        )))
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?
        .label(format!("Q* = {:.0}", result.economic_order_quantity))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| CostCurvePlotError::Render(e.to_string()))?;
    Ok(())
}
