//! Economic Order Quantity (Wilson formula) engine.
//!
//! Every function is pure: results depend only on the arguments and the
//! same arguments always produce bit-identical output. Input validation
//! happens before any value is computed.

use thiserror::Error;
use tracing::debug;

use crate::domain::simulation::SimulationInput;
use crate::services::simulation_types::{Baseline, CostSample, OptimalityCheck, SimulationResult};

pub const DEFAULT_SAMPLE_COUNT: usize = 50;
pub const DAYS_PER_YEAR: f64 = 365.0;

const CURVE_LOWER_FACTOR: f64 = 0.3;
const CURVE_UPPER_FACTOR: f64 = 2.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EoqError {
    #[error("invalid input: {field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },
}

fn ensure_positive(field: &'static str, value: f64) -> Result<f64, EoqError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EoqError::InvalidInput { field, value })
    }
}

/// A missing or zero lot size yields `None`; negative or non-finite values
/// are rejected.
fn ensure_lot_size(current_lot_size: Option<f64>) -> Result<Option<f64>, EoqError> {
    match current_lot_size {
        Some(value) if !value.is_finite() || value < 0.0 => Err(EoqError::InvalidInput {
            field: "current_lot_size",
            value,
        }),
        Some(value) if value == 0.0 => Ok(None),
        other => Ok(other),
    }
}

/// Optimal order quantity `Q* = sqrt(2DS / H)`.
pub fn compute_eoq(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
) -> Result<f64, EoqError> {
    let demand = ensure_positive("annual_demand", annual_demand)?;
    let order_cost = ensure_positive("order_cost", order_cost)?;
    let holding_cost = ensure_positive("holding_cost", holding_cost)?;

    let quantity = ((2.0 * demand * order_cost) / holding_cost).sqrt();
    ensure_positive("economic_order_quantity", quantity)
}

/// Annual cost of placing orders, `DS / Q`.
pub fn compute_ordering_cost(
    annual_demand: f64,
    order_cost: f64,
    quantity: f64,
) -> Result<f64, EoqError> {
    let demand = ensure_positive("annual_demand", annual_demand)?;
    let order_cost = ensure_positive("order_cost", order_cost)?;
    let quantity = ensure_positive("quantity", quantity)?;
    Ok((demand * order_cost) / quantity)
}

/// Annual cost of carrying the average stock, `QH / 2`.
pub fn compute_holding_cost(holding_cost: f64, quantity: f64) -> Result<f64, EoqError> {
    let holding_cost = ensure_positive("holding_cost", holding_cost)?;
    let quantity = ensure_positive("quantity", quantity)?;
    Ok((quantity * holding_cost) / 2.0)
}

/// Ordering cost plus holding cost at an arbitrary order quantity.
pub fn compute_total_cost(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    quantity: f64,
) -> Result<f64, EoqError> {
    let ordering = compute_ordering_cost(annual_demand, order_cost, quantity)?;
    let holding = compute_holding_cost(holding_cost, quantity)?;
    Ok(ordering + holding)
}

/// Samples the total cost curve between `max(1, floor(0.3 Q*))` and
/// `ceil(2 Q*)` with a whole-unit step sized so that roughly
/// `sample_count` points are produced.
///
/// A sample is flagged `near_optimum` when it lies less than one step
/// away from `Q*`.
pub fn generate_cost_curve(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    economic_order_quantity: f64,
    sample_count: usize,
) -> Result<Vec<CostSample>, EoqError> {
    let eoq = ensure_positive("economic_order_quantity", economic_order_quantity)?;
    if sample_count == 0 {
        return Err(EoqError::InvalidInput {
            field: "sample_count",
            value: 0.0,
        });
    }

    let min_quantity = (eoq * CURVE_LOWER_FACTOR).floor().max(1.0);
    let max_quantity = (eoq * CURVE_UPPER_FACTOR).ceil();
    let step = ((max_quantity - min_quantity) / sample_count as f64)
        .ceil()
        .max(1.0);
    let points = ((max_quantity - min_quantity) / step).floor() as usize + 1;

    (0..points)
        .map(|index| {
            let quantity = min_quantity + index as f64 * step;
            let ordering_cost = compute_ordering_cost(annual_demand, order_cost, quantity)?;
            let holding = compute_holding_cost(holding_cost, quantity)?;
            Ok(CostSample {
                quantity,
                total_cost: ordering_cost + holding,
                ordering_cost,
                holding_cost: holding,
                near_optimum: (quantity - eoq).abs() < step,
            })
        })
        .collect()
}

/// Compares the user's current lot size against the optimum.
///
/// A missing or zero lot size means there is nothing to compare against.
pub fn evaluate_baseline(
    annual_demand: f64,
    order_cost: f64,
    holding_cost: f64,
    economic_order_quantity: f64,
    current_lot_size: Option<f64>,
) -> Result<Baseline, EoqError> {
    let Some(current) = ensure_lot_size(current_lot_size)? else {
        return Ok(Baseline::absent());
    };

    let current_total_cost = compute_total_cost(annual_demand, order_cost, holding_cost, current)?;
    let minimum_total_cost = compute_total_cost(
        annual_demand,
        order_cost,
        holding_cost,
        economic_order_quantity,
    )?;

    Ok(Baseline {
        current_total_cost: Some(current_total_cost),
        annual_savings: Some(current_total_cost - minimum_total_cost),
    })
}

/// Number of orders needed per year, rounded up.
pub fn orders_per_year(annual_demand: f64, economic_order_quantity: f64) -> Result<u64, EoqError> {
    let demand = ensure_positive("annual_demand", annual_demand)?;
    let eoq = ensure_positive("economic_order_quantity", economic_order_quantity)?;
    Ok((demand / eoq).ceil() as u64)
}

/// Days between two orders, rounded half away from zero.
pub fn reorder_interval_days(
    annual_demand: f64,
    economic_order_quantity: f64,
) -> Result<u64, EoqError> {
    let demand = ensure_positive("annual_demand", annual_demand)?;
    let eoq = ensure_positive("economic_order_quantity", economic_order_quantity)?;
    Ok(((eoq / demand) * DAYS_PER_YEAR).round() as u64)
}

/// The second derivative of the total cost is `2DS / Q^3`; a positive value
/// at `Q*` confirms a minimum.
pub fn check_optimality(
    annual_demand: f64,
    order_cost: f64,
    economic_order_quantity: f64,
) -> Result<OptimalityCheck, EoqError> {
    let demand = ensure_positive("annual_demand", annual_demand)?;
    let order_cost = ensure_positive("order_cost", order_cost)?;
    let eoq = ensure_positive("economic_order_quantity", economic_order_quantity)?;

    let second_derivative = (2.0 * demand * order_cost) / eoq.powi(3);
    Ok(OptimalityCheck {
        second_derivative,
        is_minimum: second_derivative > 0.0,
    })
}

fn validate_input(input: &SimulationInput) -> Result<(), EoqError> {
    ensure_positive("annual_demand", input.annual_demand)?;
    ensure_positive("order_cost", input.order_cost)?;
    ensure_positive("holding_cost", input.holding_cost)?;
    ensure_lot_size(input.current_lot_size)?;
    Ok(())
}

/// Runs the full analysis for one product.
pub fn simulate(
    input: &SimulationInput,
    sample_count: usize,
) -> Result<SimulationResult, EoqError> {
    validate_input(input)?;
    let demand = input.annual_demand;
    let order_cost = input.order_cost;
    let holding_cost = input.holding_cost;

    let eoq = compute_eoq(demand, order_cost, holding_cost)?;
    let minimum_total_cost = compute_total_cost(demand, order_cost, holding_cost, eoq)?;
    let baseline = evaluate_baseline(demand, order_cost, holding_cost, eoq, input.current_lot_size)?;
    let cost_curve = generate_cost_curve(demand, order_cost, holding_cost, eoq, sample_count)?;

    let savings_percentage = match (baseline.current_total_cost, baseline.annual_savings) {
        (Some(current), Some(savings)) if current > 0.0 => Some(savings / current * 100.0),
        _ => None,
    };

    debug!(
        product = %input.product_name,
        eoq,
        minimum_total_cost,
        samples = cost_curve.len(),
        "computed economic order quantity"
    );

    Ok(SimulationResult {
        product_name: input.product_name.clone(),
        economic_order_quantity: eoq,
        minimum_total_cost,
        orders_per_year: orders_per_year(demand, eoq)?,
        reorder_interval_days: reorder_interval_days(demand, eoq)?,
        current_total_cost: baseline.current_total_cost,
        annual_savings: baseline.annual_savings,
        savings_percentage,
        optimality: check_optimality(demand, order_cost, eoq)?,
        cost_curve,
    })
}
