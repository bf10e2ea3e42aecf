//! Motion profile produced by one integrator run.

/// Index-aligned output arrays of a single integration.
///
/// Index `i` corresponds to simulated time `i · dt`.  The arrays grow step
/// by step and stop growing at the step where the run's stopping condition
/// fires, so their length is run-dependent — never assume it equals the
/// requested step count.
///
/// `effort` holds tractive effort (Newtons) for powered runs and the
/// commanded deceleration (m/s²) for braking runs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionProfile {
    /// Cumulative distance travelled, metres.  Non-decreasing.
    pub distance: Vec<f64>,
    /// Speed, m/s.  Never negative.
    pub speed: Vec<f64>,
    /// Acceleration applied at each step, m/s².
    pub acceleration: Vec<f64>,
    /// Tractive effort (N) or commanded deceleration (m/s²), per step.
    pub effort: Vec<f64>,
}

impl MotionProfile {
    /// Pre-allocate for `steps` entries and record the initial state.
    pub(crate) fn with_initial(steps: usize, speed: f64, distance: f64) -> Self {
        let mut p = Self {
            distance:     Vec::with_capacity(steps),
            speed:        Vec::with_capacity(steps),
            acceleration: Vec::with_capacity(steps),
            effort:       Vec::with_capacity(steps),
        };
        p.push(distance, speed, 0.0, 0.0);
        p
    }

    /// Append one step.  Keeps all four arrays the same length.
    #[inline]
    pub(crate) fn push(&mut self, distance: f64, speed: f64, acceleration: f64, effort: f64) {
        self.distance.push(distance);
        self.speed.push(speed);
        self.acceleration.push(acceleration);
        self.effort.push(effort);
    }

    /// Number of produced steps (including the initial state at index 0).
    #[inline]
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Highest speed reached over the run, or 0 for an empty profile.
    pub fn max_speed(&self) -> f64 {
        self.speed.iter().copied().fold(0.0, f64::max)
    }

    /// Distance at the final produced step, or 0 for an empty profile.
    pub fn final_distance(&self) -> f64 {
        self.distance.last().copied().unwrap_or(0.0)
    }

    /// Timestamp of each step for a fixed `dt`: `[0, dt, 2·dt, …]`.
    pub fn time_profile(&self, dt: f64) -> Vec<f64> {
        (0..self.len()).map(|i| i as f64 * dt).collect()
    }
}
