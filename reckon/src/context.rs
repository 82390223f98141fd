//! Ambient evaluation context
//!
//! Settings visible to operators during invocation. The context is threaded
//! through every `invoke` call as an explicit parameter, so a shared operator
//! catalog can serve concurrent evaluations with distinct contexts.

use serde::Serialize;
use std::f64::consts::PI;
use std::fmt;

/// The angle unit active during evaluation
///
/// Trigonometric operators convert their input to radians before invoking the
/// underlying function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
    Gradians,
}

impl AngleUnit {
    /// Convert a magnitude expressed in this unit to radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value * PI / 180.0,
            AngleUnit::Gradians => value * PI / 200.0,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Radians => write!(f, "radians"),
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Gradians => write!(f, "gradians"),
        }
    }
}

/// Per-evaluation settings passed to every operator invocation
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    pub angle_unit: AngleUnit,
}

impl EvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angle_unit(angle_unit: AngleUnit) -> Self {
        Self { angle_unit }
    }
}
