//! Engine measurements entered by the user.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::prompt::Prompter;

pub const DISPLACEMENT_PROMPT: &str = "Enter engine displacement (cu in): ";
pub const STROKE_PROMPT: &str = "Enter stroke (in): ";
pub const RPM_PROMPT: &str = "Enter engine RPM: ";
pub const VE_PROMPT: &str = "Enter volumetric efficiency (%): ";
pub const TORQUE_PROMPT: &str = "Enter torque (lb-ft): ";

/// The five measurements a report is computed from.
///
/// Values are taken as typed. Nothing is range-checked, so a VE of 120% or a
/// negative RPM flows straight into the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineInputs {
    /// Engine displacement in cubic inches
    pub displacement: f64,
    /// Stroke in inches
    pub stroke: f64,
    pub rpm: f64,
    /// Volumetric efficiency as a percentage (80.0 means 80%)
    pub ve_percent: f64,
    /// Torque in lb-ft
    pub torque: f64,
}

impl EngineInputs {
    /// Prompt for each measurement in turn.
    ///
    /// Order is displacement, stroke, RPM, VE, torque. A rejected answer only
    /// repeats the current question.
    pub fn acquire<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Self> {
        let displacement = prompter.prompt_f64(DISPLACEMENT_PROMPT)?;
        debug!(displacement, "displacement entered");
        let stroke = prompter.prompt_f64(STROKE_PROMPT)?;
        debug!(stroke, "stroke entered");
        let rpm = prompter.prompt_f64(RPM_PROMPT)?;
        debug!(rpm, "rpm entered");
        let ve_percent = prompter.prompt_f64(VE_PROMPT)?;
        debug!(ve_percent, "volumetric efficiency entered");
        let torque = prompter.prompt_f64(TORQUE_PROMPT)?;
        debug!(torque, "torque entered");

        Ok(Self {
            displacement,
            stroke,
            rpm,
            ve_percent,
            torque,
        })
    }

    /// Volumetric efficiency as a fraction.
    #[must_use]
    pub fn ve_fraction(&self) -> f64 {
        self.ve_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineCalcError;

    #[test]
    fn test_acquire_reads_in_order() {
        let mut p = Prompter::new("350\n3.48\n6000\n80\n400\n".as_bytes(), Vec::new());
        let inputs = EngineInputs::acquire(&mut p).unwrap();
        assert_eq!(
            inputs,
            EngineInputs {
                displacement: 350.0,
                stroke: 3.48,
                rpm: 6000.0,
                ve_percent: 80.0,
                torque: 400.0,
            }
        );

        let (_, out) = p.into_inner();
        let expected = [
            DISPLACEMENT_PROMPT,
            STROKE_PROMPT,
            RPM_PROMPT,
            VE_PROMPT,
            TORQUE_PROMPT,
        ]
        .concat();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_bad_answer_does_not_repeat_earlier_prompts() {
        let mut p = Prompter::new("350\n3.48\nfast\n6000\n80\n400\n".as_bytes(), Vec::new());
        EngineInputs::acquire(&mut p).unwrap();

        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Please enter a valid number.").count(), 1);
        assert_eq!(out.matches(DISPLACEMENT_PROMPT).count(), 1);
        assert_eq!(out.matches(STROKE_PROMPT).count(), 1);
        assert_eq!(out.matches(RPM_PROMPT).count(), 2);
        assert_eq!(out.matches(TORQUE_PROMPT).count(), 1);
    }

    #[test]
    fn test_acquire_stops_at_end_of_input() {
        let mut p = Prompter::new("350\n3.48\n".as_bytes(), Vec::new());
        let err = EngineInputs::acquire(&mut p).unwrap_err();
        assert!(matches!(
            err,
            EngineCalcError::EndOfInput { ref question } if question == RPM_PROMPT
        ));
    }

    #[test]
    fn test_ve_fraction() {
        let inputs = EngineInputs {
            displacement: 350.0,
            stroke: 3.48,
            rpm: 6000.0,
            ve_percent: 80.0,
            torque: 400.0,
        };
        assert_eq!(inputs.ve_fraction(), 0.8);

        let over = EngineInputs {
            ve_percent: 125.0,
            ..inputs
        };
        assert_eq!(over.ve_fraction(), 1.25);
    }
}
