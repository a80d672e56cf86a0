use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::domain::project::Project;
use crate::services::eoq::{EoqError, simulate};
use crate::services::simulation_types::SimulationResult;
use crate::services::simulation_yaml::{SimulationYamlError, load_project_from_yaml_file};

const TOP_SAVINGS_LIMIT: usize = 5;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to load project: {0}")]
    LoadProject(#[from] SimulationYamlError),
    #[error("simulation for product {product} is invalid: {source}")]
    Simulation { product: String, source: EoqError },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProductSavings {
    pub product_name: String,
    pub economic_order_quantity: f64,
    pub annual_savings: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectReport {
    pub project_name: String,
    pub description: Option<String>,
    pub generated_on: String,
    pub simulation_count: usize,
    pub total_current_cost: f64,
    pub total_optimal_cost: f64,
    pub total_annual_savings: f64,
    pub savings_percentage: Option<f64>,
    pub top_savings: Vec<ProductSavings>,
    pub simulations: Vec<SimulationResult>,
}

/// Runs every simulation of the project and aggregates the savings.
///
/// The first invalid simulation aborts the whole report.
pub fn build_project_report(
    project: &Project,
    generated_on: NaiveDate,
    sample_count: usize,
) -> Result<ProjectReport, ReportError> {
    let simulations = project
        .simulations
        .iter()
        .map(|input| {
            simulate(input, sample_count).map_err(|source| ReportError::Simulation {
                product: input.product_name.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_current_cost: f64 = simulations.iter().filter_map(|s| s.current_total_cost).sum();
    let total_optimal_cost: f64 = simulations.iter().map(|s| s.minimum_total_cost).sum();
    let total_annual_savings: f64 = simulations.iter().filter_map(|s| s.annual_savings).sum();
    let savings_percentage = if total_current_cost > 0.0 {
        Some(total_annual_savings / total_current_cost * 100.0)
    } else {
        None
    };

    info!(
        project = %project.name,
        simulations = simulations.len(),
        total_annual_savings,
        "built project report"
    );

    Ok(ProjectReport {
        project_name: project.name.clone(),
        description: project.description.clone(),
        generated_on: generated_on.format("%Y-%m-%d").to_string(),
        simulation_count: simulations.len(),
        total_current_cost,
        total_optimal_cost,
        total_annual_savings,
        savings_percentage,
        top_savings: top_savings(&simulations),
        simulations,
    })
}

fn top_savings(simulations: &[SimulationResult]) -> Vec<ProductSavings> {
    let mut ranked: Vec<ProductSavings> = simulations
        .iter()
        .filter_map(|result| {
            result
                .annual_savings
                .filter(|savings| *savings != 0.0)
                .map(|annual_savings| ProductSavings {
                    product_name: result.product_name.clone(),
                    economic_order_quantity: result.economic_order_quantity,
                    annual_savings,
                })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.annual_savings
            .partial_cmp(&a.annual_savings)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_SAVINGS_LIMIT);
    ranked
}

pub fn report_from_yaml_file<P: AsRef<Path>>(
    path: P,
    generated_on: NaiveDate,
    sample_count: usize,
) -> Result<ProjectReport, ReportError> {
    let project = load_project_from_yaml_file(path)?;
    build_project_report(&project, generated_on, sample_count)
}
