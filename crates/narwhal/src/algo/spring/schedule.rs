use crate::algo::SpeedRange;

/// Linearly decaying speed caps, one per update step.
///
/// Equivalent to `linspace(start, end, updates)`: the first update uses `start`, the last uses
/// `end`. A single update uses `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSchedule {
    start: f64,
    end: f64,
    updates: usize,
}

impl SpeedSchedule {
    pub fn new(range: SpeedRange, updates: usize) -> Self {
        Self {
            start: range.start,
            end: range.end,
            updates,
        }
    }

    pub fn len(&self) -> usize {
        self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates == 0
    }

    /// Cap for update `k` (0-based).
    pub fn speed(&self, k: usize) -> f64 {
        if self.updates <= 1 {
            return self.start;
        }
        let t = k.min(self.updates - 1) as f64 / (self.updates - 1) as f64;
        self.start + (self.end - self.start) * t
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.updates).map(|k| self.speed(k))
    }
}

#[cfg(test)]
mod tests {
    use super::SpeedSchedule;
    use crate::algo::SpeedRange;

    #[test]
    fn decays_from_start_to_end() {
        let s = SpeedSchedule::new(SpeedRange::default(), 10);
        let speeds: Vec<f64> = s.iter().collect();
        assert_eq!(speeds.len(), 10);
        assert_eq!(speeds[0], 1.0);
        assert!((speeds[9] - 0.1).abs() < 1e-12);
        assert!(speeds.windows(2).all(|w| w[1] < w[0]));
        assert!((speeds[1] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn single_update_uses_start() {
        let s = SpeedSchedule::new(SpeedRange::default(), 1);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1.0]);
        assert!(SpeedSchedule::new(SpeedRange::default(), 0).is_empty());
    }
}
