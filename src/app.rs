//! Top-level interactive session: prompt, compute, print.

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::Result;
use crate::inputs::EngineInputs;
use crate::prompt::Prompter;
use crate::report::{EngineReport, OutputFormat};

/// Run one full session over `reader`/`writer`.
///
/// Prompts for the five measurements, then writes the report in `format`.
/// Returns the report so callers can inspect the computed values.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    format: OutputFormat,
) -> Result<EngineReport> {
    info!(%format, "starting engine calculation session");

    let mut prompter = Prompter::new(reader, writer);
    let inputs = EngineInputs::acquire(&mut prompter)?;

    let report = EngineReport::from_inputs(&inputs);
    report.write_to(prompter.writer_mut(), format)?;

    info!("report written");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Metric;

    #[test]
    fn test_run_text() {
        let mut out = Vec::new();
        let report = run("350\n3.48\n6000\n80\n400\n".as_bytes(), &mut out, OutputFormat::Text)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Enter engine displacement (cu in): Enter stroke (in): "));
        assert!(out.ends_with("Airflow (CFM)                     486.11\n"));
        assert_eq!(report.value(Metric::Torque), Some(400.0));
    }

    #[test]
    fn test_run_json() {
        let mut out = Vec::new();
        run("350\n3.48\n6000\n80\n400\n".as_bytes(), &mut out, OutputFormat::Json).unwrap();

        let out = String::from_utf8(out).unwrap();
        let json_start = out.find('{').expect("JSON body");
        let value: serde_json::Value = serde_json::from_str(&out[json_start..]).unwrap();
        assert_eq!(value["inputs"]["displacement"], 350.0);
    }
}
