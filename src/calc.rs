//! Engine performance formulas
//!
//! Pure, closed-form conversions between common engine measurements. Every
//! function takes plain `f64` scalars in fixed imperial units and returns an
//! `f64`. Nothing is validated: a zero denominator yields infinity or NaN,
//! which callers print as-is.
//!
//! | Function         | Formula                                   | Unit   |
//! |------------------|-------------------------------------------|--------|
//! | [`horsepower`]   | torque × rpm / 5252                       | hp     |
//! | [`torque`]       | horsepower × 5252 / rpm                   | lb-ft  |
//! | [`bmep`]         | 150.8 × torque / displacement             | psi    |
//! | [`piston_speed`] | 2 × stroke × rpm / 12                     | ft/min |
//! | [`airflow`]      | displacement × rpm × ve / 3456            | CFM    |

/// RPM at which horsepower and torque (lb-ft) are numerically equal.
pub const HP_TORQUE_CROSSOVER_RPM: f64 = 5252.0;

/// BMEP factor for a four-stroke engine with torque in lb-ft and
/// displacement in cubic inches (4π × 12).
pub const BMEP_FOUR_STROKE_FACTOR: f64 = 150.8;

/// Cubic inches per cubic foot times two revolutions per intake stroke.
pub const AIRFLOW_DIVISOR: f64 = 3456.0;

/// The piston travels the stroke twice per revolution.
pub const STROKES_PER_REVOLUTION: f64 = 2.0;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// Horsepower from torque (lb-ft) and engine speed.
#[must_use]
pub fn horsepower(torque: f64, rpm: f64) -> f64 {
    torque * rpm / HP_TORQUE_CROSSOVER_RPM
}

/// Torque (lb-ft) from horsepower and engine speed.
///
/// Undefined at `rpm == 0`; the result is then infinite or NaN.
#[must_use]
pub fn torque(horsepower: f64, rpm: f64) -> f64 {
    horsepower * HP_TORQUE_CROSSOVER_RPM / rpm
}

/// Brake mean effective pressure (psi) from torque (lb-ft) and
/// displacement (cu in).
#[must_use]
pub fn bmep(torque: f64, displacement: f64) -> f64 {
    BMEP_FOUR_STROKE_FACTOR * torque / displacement
}

/// Mean piston speed (ft/min) from stroke (in) and engine speed.
#[must_use]
pub fn piston_speed(stroke: f64, rpm: f64) -> f64 {
    STROKES_PER_REVOLUTION * stroke * rpm / INCHES_PER_FOOT
}

/// Airflow (CFM) from displacement (cu in), engine speed and volumetric
/// efficiency given as a fraction (0.0 - 1.0, not clamped).
#[must_use]
pub fn airflow(displacement: f64, rpm: f64, ve: f64) -> f64 {
    displacement * rpm * ve / AIRFLOW_DIVISOR
}
