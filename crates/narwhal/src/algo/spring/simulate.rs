use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use super::force::SpringMatrix;
use super::schedule::SpeedSchedule;
use crate::Point;
use crate::algo::LayoutOptions;
use crate::error::{Error, Result};

const MIN_FORCE: f64 = 1e-9;

/// Positions of every node after one step, in node-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// 0 for the starting positions, `k` after the `k`-th update.
    pub step: usize,
    /// Speed cap used by the update that produced this frame.
    pub speed: Option<f64>,
    pub points: Vec<Point>,
}

impl Frame {
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Forward-only sequence of simulation frames.
///
/// Frames are computed on demand. The first frame holds the starting positions, each following
/// frame one update step. Once exhausted it keeps returning `None`; a new run needs a new
/// trajectory.
#[derive(Debug)]
pub struct Trajectory<'a> {
    spring: &'a SpringMatrix,
    points: Vec<Point>,
    schedule: SpeedSchedule,
    gravity: f64,
    distance_floor: f64,
    frames: usize,
    emitted: usize,
}

impl<'a> Trajectory<'a> {
    pub(crate) fn new(
        spring: &'a SpringMatrix,
        links: usize,
        opts: &LayoutOptions,
    ) -> Result<Self> {
        opts.validate()?;
        let n = spring.dim();
        let points = initial_points(n, opts)?;
        let frames = if n == 0 { 0 } else { opts.steps.max(1) };

        tracing::debug!(
            nodes = n,
            links,
            steps = opts.steps,
            seeded = opts.seed.is_some(),
            "starting spring layout"
        );

        Ok(Self {
            spring,
            points,
            schedule: SpeedSchedule::new(opts.speed, frames.saturating_sub(1)),
            gravity: opts.gravity,
            distance_floor: opts.distance_floor,
            frames,
            emitted: 0,
        })
    }

    /// Current positions (those of the last emitted frame).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Like [`Iterator::next`], but reports exhaustion as an error.
    pub fn next_frame(&mut self) -> Result<Frame> {
        self.next().ok_or(Error::Exhausted {
            frames: self.frames,
        })
    }

    /// Runs the remaining steps without materializing frames and returns the final positions.
    pub fn finish(mut self) -> Vec<Point> {
        while self.advance().is_some() {}
        self.points
    }

    /// Moves to the next frame; `None` once every frame has been produced.
    fn advance(&mut self) -> Option<Option<f64>> {
        if self.emitted >= self.frames {
            return None;
        }
        let speed = if self.emitted == 0 {
            None
        } else {
            let speed = self.schedule.speed(self.emitted - 1);
            self.update(speed);
            Some(speed)
        };
        self.emitted += 1;
        Some(speed)
    }

    fn update(&mut self, speed: f64) {
        let mut forces = repulsion(&self.points, self.distance_floor);
        let attraction = self.spring.apply(&self.points);
        for ((f, a), p) in forces.iter_mut().zip(&attraction).zip(&self.points) {
            *f += a - p * self.gravity;
        }

        let mut max_move = 0.0_f64;
        for (p, f) in self.points.iter_mut().zip(&forces) {
            let d = limited(f, speed);
            max_move = max_move.max(d.norm());
            *p += d;
        }

        tracing::trace!(step = self.emitted, speed, max_move, "spring step");
    }
}

impl Iterator for Trajectory<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let speed = self.advance()?;
        Some(Frame {
            step: self.emitted - 1,
            speed,
            points: self.points.clone(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.frames - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Trajectory<'_> {}

impl FusedIterator for Trajectory<'_> {}

fn initial_points(n: usize, opts: &LayoutOptions) -> Result<Vec<Point>> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let initial = opts.initial.as_ref();
    let xs = axis(n, "x", initial.and_then(|i| i.x.as_deref()), &mut rng)?;
    let ys = axis(n, "y", initial.and_then(|i| i.y.as_deref()), &mut rng)?;
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect())
}

fn axis(
    n: usize,
    name: &'static str,
    supplied: Option<&[f64]>,
    rng: &mut StdRng,
) -> Result<Vec<f64>> {
    let Some(values) = supplied else {
        return Ok((0..n).map(|_| rng.sample(StandardNormal)).collect());
    };
    if values.len() != n {
        return Err(Error::InitialPositionsMismatch {
            axis: name,
            expected: n,
            found: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteInitialPosition { axis: name, index });
    }
    Ok(values.to_vec())
}

/// Mean over all other nodes of `(self - other) / max(|self - other|^2, floor)`.
///
/// Zero for fewer than two nodes.
pub(crate) fn repulsion(points: &[Point], distance_floor: f64) -> Vec<Point> {
    let n = points.len();
    let mut forces = vec![Point::zeros(); n];
    if n < 2 {
        return forces;
    }
    for i in 0..n {
        for j in (i + 1)..n {
            let d = points[i] - points[j];
            let push = d / d.norm_squared().max(distance_floor);
            forces[i] += push;
            forces[j] -= push;
        }
    }
    let others = (n - 1) as f64;
    for f in &mut forces {
        *f /= others;
    }
    forces
}

/// Compresses the magnitude of `force` to `tanh(|force|) * cap`, keeping its direction.
pub(crate) fn limited(force: &Point, cap: f64) -> Point {
    let rad = force.norm().max(MIN_FORCE);
    force * (rad.tanh() / rad * cap)
}

/// Subtracts the mean, then scales so the largest magnitude is 1.
pub(crate) fn recenter(points: &mut [Point]) {
    if points.is_empty() {
        return;
    }
    let mean = points.iter().fold(Point::zeros(), |acc, p| acc + p) / points.len() as f64;
    let mut max_radius = 0.0_f64;
    for p in points.iter_mut() {
        *p -= mean;
        max_radius = max_radius.max(p.norm());
    }
    if max_radius > 0.0 && max_radius.is_finite() {
        for p in points.iter_mut() {
            *p /= max_radius;
        }
    }
}
