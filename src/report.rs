//! Engine performance report
//!
//! Turns [`EngineInputs`] into the fixed, ordered list of metrics and renders
//! it either as the aligned console table or as JSON.
//!
//! ```text
//!
//! Metric                             Value
//! ----------------------------------------
//! Horsepower (hp)                   456.97
//! Torque (lb-ft)                    400.00
//! BMEP (psi)                        172.34
//! Piston Speed (ft/min)            3480.00
//! Airflow (CFM)                     486.11
//! ```

use std::fmt;
use std::io::Write;

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::calc;
use crate::error::Result;
use crate::inputs::EngineInputs;

/// Width of the left-aligned label column.
pub const LABEL_WIDTH: usize = 25;
/// Width of the right-aligned value column.
pub const VALUE_WIDTH: usize = 15;

// ============================================================================
// Metrics
// ============================================================================

/// A reported metric. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumIter, IntoStaticStr)]
pub enum Metric {
    #[strum(serialize = "Horsepower (hp)")]
    Horsepower,
    #[strum(serialize = "Torque (lb-ft)")]
    Torque,
    #[strum(serialize = "BMEP (psi)")]
    Bmep,
    #[strum(serialize = "Piston Speed (ft/min)")]
    PistonSpeed,
    #[strum(serialize = "Airflow (CFM)")]
    Airflow,
}

impl Metric {
    /// Label printed in the report's first column.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Value of this metric for the given measurements.
    ///
    /// Torque is echoed from the input rather than recomputed.
    #[must_use]
    pub fn compute(self, inputs: &EngineInputs) -> f64 {
        match self {
            Metric::Horsepower => calc::horsepower(inputs.torque, inputs.rpm),
            Metric::Torque => inputs.torque,
            Metric::Bmep => calc::bmep(inputs.torque, inputs.displacement),
            Metric::PistonSpeed => calc::piston_speed(inputs.stroke, inputs.rpm),
            Metric::Airflow => {
                calc::airflow(inputs.displacement, inputs.rpm, inputs.ve_fraction())
            }
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One `(label, value)` line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricRow {
    pub metric: Metric,
    pub value: f64,
}

// ============================================================================
// Report
// ============================================================================

/// How the report is written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned two-column console table
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Computed metrics together with the inputs they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineReport {
    pub inputs: EngineInputs,
    pub metrics: Vec<MetricRow>,
}

impl EngineReport {
    #[must_use]
    pub fn from_inputs(inputs: &EngineInputs) -> Self {
        let metrics = Metric::iter()
            .map(|metric| MetricRow {
                metric,
                value: metric.compute(inputs),
            })
            .collect();

        Self {
            inputs: *inputs,
            metrics,
        }
    }

    /// Value of `metric`, if present.
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.metrics
            .iter()
            .find(|row| row.metric == metric)
            .map(|row| row.value)
    }

    /// The console table, starting with a blank line.
    #[must_use]
    pub fn render_table(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report in `format` and flush.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => write!(writer, "{}", self)?,
            OutputFormat::Json => writeln!(writer, "{}", self.render_json()?)?,
        }
        writer.flush()?;
        Ok(())
    }
}

/// Header row: `Metric` left-aligned, `Value` right-aligned.
#[must_use]
pub fn header() -> String {
    format!(
        "{:<lw$}{:>vw$}",
        "Metric",
        "Value",
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    )
}

impl fmt::Display for EngineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = header();
        writeln!(f)?;
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;
        for row in &self.metrics {
            write!(f, "{:<lw$}", row.metric.label(), lw = LABEL_WIDTH)?;
            // printed as lowercase `nan`, like `inf`
            if row.value.is_nan() {
                writeln!(f, "{:>vw$}", "nan", vw = VALUE_WIDTH)?;
            } else {
                writeln!(f, "{:>vw$.2}", row.value, vw = VALUE_WIDTH)?;
            }
        }
        Ok(())
    }
}
