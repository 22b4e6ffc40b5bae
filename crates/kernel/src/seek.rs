//! The per-tick seek step.

use std::str::FromStr;

use arena_common::math::direction_to;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// World units moved per tick.
pub const DEFAULT_STEP: f32 = 0.1;

/// Slack added to the step when testing for arrival, so float accumulation
/// over many ticks cannot leave an agent one sliver short of its target.
///
/// The window is absolute, not scaled by the step. Under `Arrive`, an agent
/// whose remaining distance lies in `(step, step + ARRIVAL_EPSILON]` lands on
/// the target and covers up to `step + ARRIVAL_EPSILON` that tick, so the
/// `remaining = distance - step` law does not hold exactly there.
/// `Overshoot` never uses the slack.
pub const ARRIVAL_EPSILON: f32 = 1e-4;

/// How an agent behaves once it is within one step of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementLaw {
    /// Land exactly on the target and enter the arrived state.
    #[default]
    Arrive,
    /// Always advance a full step; only an exact zero distance stops movement.
    Overshoot,
}

impl FromStr for MovementLaw {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arrive" => Ok(Self::Arrive),
            "overshoot" => Ok(Self::Overshoot),
            other => Err(KernelError::UnknownMovementLaw(other.to_string())),
        }
    }
}

impl std::fmt::Display for MovementLaw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arrive => f.write_str("arrive"),
            Self::Overshoot => f.write_str("overshoot"),
        }
    }
}

/// Step size and movement law shared by every agent in a world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeekParams {
    step: f32,
    law: MovementLaw,
}

impl SeekParams {
    pub fn new(step: f32, law: MovementLaw) -> Result<Self, KernelError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(KernelError::InvalidStep(step));
        }
        Ok(Self { step, law })
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn law(&self) -> MovementLaw {
        self.law
    }
}

impl Default for SeekParams {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            law: MovementLaw::default(),
        }
    }
}

/// Result of a single seek step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Agent already sits on the target; nothing moves.
    Coincident,
    /// Agent advanced to the contained position.
    Moved(Vec3),
    /// Agent landed exactly on the target position.
    Arrived(Vec3),
}

/// Advance `position` toward `target` by one step under `params`.
pub fn step_toward(position: Vec3, target: Vec3, params: &SeekParams) -> StepOutcome {
    let Some((direction, distance)) = direction_to(position, target) else {
        return StepOutcome::Coincident;
    };
    match params.law {
        MovementLaw::Arrive if distance <= params.step + ARRIVAL_EPSILON => {
            StepOutcome::Arrived(target)
        }
        _ => StepOutcome::Moved(position + direction * params.step),
    }
}
