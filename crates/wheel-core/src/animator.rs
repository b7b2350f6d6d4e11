use crate::planner::SpinPlan;

/// How boundary crossings are reported when one frame spans several.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TickPolicy {
    /// One tick per boundary crossed.
    #[default]
    CatchUp,
    /// At most one tick per frame; the cursor jumps to the current boundary.
    /// Under-reports on slow frames.
    SinglePerFrame,
}

/// Outcome of one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameResult {
    pub angle: f64,
    pub ticks: u32,
    pub done: bool,
    pub chosen_index: usize,
}

/// Cubic ease-out: fast start, slow stop.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[inline]
fn boundary_index(angle: f64, degrees_per_segment: f64) -> i64 {
    (angle / degrees_per_segment).floor() as i64
}

/// Time-based spin animation: Idle until `start`, then Spinning until the
/// elapsed time reaches the duration.
#[derive(Clone, Debug)]
pub struct SpinAnimator {
    duration_ms: f64,
    degrees_per_segment: f64,
    tick_policy: TickPolicy,
    plan: Option<SpinPlan>,
    last_tick_index: i64,
}

impl SpinAnimator {
    pub fn new(duration_ms: f64, degrees_per_segment: f64, tick_policy: TickPolicy) -> Self {
        Self {
            duration_ms,
            degrees_per_segment,
            tick_policy,
            plan: None,
            last_tick_index: 0,
        }
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.plan.is_some()
    }

    pub fn plan(&self) -> Option<&SpinPlan> {
        self.plan.as_ref()
    }

    #[inline]
    pub fn last_tick_index(&self) -> i64 {
        self.last_tick_index
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Enter Spinning. Returns `false` and leaves the running spin untouched
    /// if one is already in flight.
    pub fn start(&mut self, plan: SpinPlan) -> bool {
        if self.plan.is_some() {
            return false;
        }
        self.last_tick_index = boundary_index(plan.start_angle, self.degrees_per_segment);
        self.plan = Some(SpinPlan {
            start_timestamp: None,
            ..plan
        });
        true
    }

    /// Advance to `now_ms`. Returns `None` while Idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameResult> {
        let plan = self.plan.as_mut()?;
        let started = *plan.start_timestamp.get_or_insert(now_ms);
        let elapsed = (now_ms - started).max(0.0);
        let progress = (elapsed / self.duration_ms).min(1.0);
        let done = progress >= 1.0;
        let angle = if done {
            plan.target_angle
        } else {
            let eased = ease_out_cubic(progress);
            plan.start_angle + eased * (plan.target_angle - plan.start_angle)
        };
        let chosen_index = plan.chosen_index;

        let current_tick = boundary_index(angle, self.degrees_per_segment);
        let mut ticks = 0;
        if current_tick > self.last_tick_index {
            ticks = match self.tick_policy {
                TickPolicy::CatchUp => {
                    u32::try_from(current_tick - self.last_tick_index).unwrap_or(u32::MAX)
                }
                TickPolicy::SinglePerFrame => 1,
            };
            self.last_tick_index = current_tick;
        }

        if done {
            self.plan = None;
        }
        Some(FrameResult {
            angle,
            ticks,
            done,
            chosen_index,
        })
    }
}
