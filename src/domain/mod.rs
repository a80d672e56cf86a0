pub mod project;
pub mod simulation;
