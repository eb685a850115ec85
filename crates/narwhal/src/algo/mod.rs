pub mod spring;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for a spring layout run.
///
/// Deserializes with every field optional, so a partial JSON object such as
/// `{"steps": 60, "seed": 7}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Number of frames, counting the initial one. `steps - 1` update steps are simulated.
    pub steps: usize,
    /// Seed for the normal draws of the starting positions. `None` seeds from OS entropy, so
    /// repeated runs differ.
    pub seed: Option<u64>,
    /// Explicit starting coordinates, in node-index order.
    pub initial: Option<InitialPositions>,
    /// Pull of every node towards the origin, proportional to its distance.
    pub gravity: f64,
    /// Lower bound on squared distances in the repulsion term.
    pub distance_floor: f64,
    pub speed: SpeedRange,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            steps: 120,
            seed: None,
            initial: None,
            gravity: 0.0,
            distance_floor: 1e-9,
            speed: SpeedRange::default(),
        }
    }
}

impl LayoutOptions {
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial(mut self, initial: InitialPositions) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.distance_floor.is_finite() && self.distance_floor > 0.0) {
            return Err(Error::InvalidOption {
                name: "distance_floor",
                reason: format!("must be finite and positive, got {}", self.distance_floor),
            });
        }
        if !self.gravity.is_finite() {
            return Err(Error::InvalidOption {
                name: "gravity",
                reason: format!("must be finite, got {}", self.gravity),
            });
        }
        for (name, v) in [("speed.start", self.speed.start), ("speed.end", self.speed.end)] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(Error::InvalidOption {
                    name,
                    reason: format!("must be finite and non-negative, got {v}"),
                });
            }
        }
        Ok(())
    }
}

/// Per-step displacement cap, decaying linearly from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedRange {
    pub start: f64,
    pub end: f64,
}

impl Default for SpeedRange {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: 0.1,
        }
    }
}

/// Caller-supplied starting coordinates. A missing axis is drawn at random.
///
/// Nodes that start on the same point feel no repulsion from each other. If every node starts on
/// one point, nothing ever separates them and the final layout puts every node at the origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialPositions {
    pub x: Option<Vec<f64>>,
    pub y: Option<Vec<f64>>,
}

impl InitialPositions {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a crate::Point>,
    {
        let (x, y) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self::new(x, y)
    }

    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}
