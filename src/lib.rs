//! enginecalc Library
//!
//! Closed-form engine performance formulas and the interactive console
//! report built on them.

pub mod app;
pub mod calc;
pub mod cli;
pub mod error;
pub mod inputs;
pub mod prompt;
pub mod report;

// Re-export main types for convenience
pub use app::run;
pub use calc::{airflow, bmep, horsepower, piston_speed, torque};
pub use error::{EngineCalcError, Result};
pub use inputs::EngineInputs;
pub use prompt::Prompter;
pub use report::{EngineReport, Metric, MetricRow, OutputFormat};
