use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::project::Project;
use crate::domain::simulation::SimulationInput;

#[derive(Error, Debug)]
pub enum SimulationYamlError {
    #[error("failed to read yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("product name must not be empty")]
    EmptyProductName,
    #[error("project name must not be empty")]
    EmptyProjectName,
}

/// Canonical simulation schema. The aliases accept the key names used by
/// the legacy REST API.
#[derive(Debug, Deserialize)]
struct SimulationRecord {
    #[serde(alias = "nome_produto", alias = "nome")]
    product_name: String,
    #[serde(alias = "demanda_anual", alias = "demanda")]
    annual_demand: f64,
    #[serde(alias = "custo_pedido")]
    order_cost: f64,
    #[serde(alias = "custo_manutencao")]
    holding_cost: f64,
    #[serde(default, alias = "lote_atual_empresa")]
    current_lot_size: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    #[serde(alias = "nome_grupo", alias = "nome")]
    name: String,
    #[serde(default, alias = "descricao")]
    description: Option<String>,
    #[serde(default, alias = "simulacoes")]
    simulations: Vec<SimulationRecord>,
}

impl TryFrom<SimulationRecord> for SimulationInput {
    type Error = SimulationYamlError;

    fn try_from(record: SimulationRecord) -> Result<Self, Self::Error> {
        let product_name = record.product_name.trim();
        if product_name.is_empty() {
            return Err(SimulationYamlError::EmptyProductName);
        }
        Ok(SimulationInput {
            product_name: product_name.to_string(),
            annual_demand: record.annual_demand,
            order_cost: record.order_cost,
            holding_cost: record.holding_cost,
            current_lot_size: record.current_lot_size,
        })
    }
}

pub fn deserialize_simulation_from_yaml_str(
    input: &str,
) -> Result<SimulationInput, SimulationYamlError> {
    let record: SimulationRecord = serde_yaml::from_str(input)?;
    SimulationInput::try_from(record)
}

pub fn load_simulation_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<SimulationInput, SimulationYamlError> {
    let contents = read_yaml_file(path.as_ref())?;
    deserialize_simulation_from_yaml_str(&contents)
}

pub fn deserialize_project_from_yaml_str(input: &str) -> Result<Project, SimulationYamlError> {
    let record: ProjectRecord = serde_yaml::from_str(input)?;
    let name = record.name.trim();
    if name.is_empty() {
        return Err(SimulationYamlError::EmptyProjectName);
    }
    let simulations = record
        .simulations
        .into_iter()
        .map(SimulationInput::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Project {
        name: name.to_string(),
        description: record.description,
        simulations,
    })
}

pub fn load_project_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Project, SimulationYamlError> {
    let contents = read_yaml_file(path.as_ref())?;
    deserialize_project_from_yaml_str(&contents)
}

fn read_yaml_file(path: &Path) -> Result<String, SimulationYamlError> {
    std::fs::read_to_string(path).map_err(|source| SimulationYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn serialize_result_to_yaml<W: Write, T: Serialize>(writer: &mut W, value: &T) -> io::Result<()> {
    let yaml = serde_yaml::to_string(value).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
