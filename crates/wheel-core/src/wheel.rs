use crate::animator::{FrameResult, SpinAnimator};
use crate::config::WheelConfig;
use crate::constants::FULL_TURN_DEG;
use crate::error::WheelError;
use crate::planner::{plan_spin, SpinPlan};
use crate::segment::{Segment, SegmentTable};
use crate::selector::OutcomeSelector;

/// Render-side hooks. The wheel calls these from inside `request_spin` and
/// `frame`; implementations should not call back into the wheel.
pub trait WheelObserver {
    /// Current rotation in degrees, every frame while spinning.
    fn on_angle_update(&mut self, angle_deg: f64);
    /// One segment boundary passed the pointer.
    fn on_tick(&mut self);
    /// The spin finished on `segment`.
    fn on_spin_complete(&mut self, segment: &Segment);
    /// A spin request was accepted.
    fn on_spin_start(&mut self, _plan: &SpinPlan) {}
}

/// Observer that ignores everything.
impl WheelObserver for () {
    fn on_angle_update(&mut self, _angle_deg: f64) {}
    fn on_tick(&mut self) {}
    fn on_spin_complete(&mut self, _segment: &Segment) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelState {
    pub current_angle: f64,
    pub is_spinning: bool,
    pub spin_enabled: bool,
}

/// One wheel instance: configuration, state, outcome source and animator.
pub struct Wheel {
    config: WheelConfig,
    state: WheelState,
    selector: OutcomeSelector,
    animator: SpinAnimator,
    completed_spins: u32,
}

impl Wheel {
    /// Build a wheel. Spinning stays disabled until [`Wheel::enable_spin`].
    pub fn new(config: WheelConfig, selector: OutcomeSelector) -> Result<Self, WheelError> {
        config.validate()?;
        let animator = SpinAnimator::new(
            config.spin_duration_ms,
            config.segments.degrees_per_segment(),
            config.tick_policy,
        );
        Ok(Self {
            config,
            state: WheelState::default(),
            selector,
            animator,
            completed_spins: 0,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn segments(&self) -> &SegmentTable {
        &self.config.segments
    }

    #[inline]
    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn completed_spins(&self) -> u32 {
        self.completed_spins
    }

    pub fn animator(&self) -> &SpinAnimator {
        &self.animator
    }

    pub fn enable_spin(&mut self) {
        self.state.spin_enabled = true;
    }

    pub fn disable_spin(&mut self) {
        self.state.spin_enabled = false;
    }

    #[inline]
    pub fn can_spin(&self) -> bool {
        !self.state.is_spinning && self.state.spin_enabled
    }

    /// Start a spin if the wheel is idle and permitted. Extra requests are
    /// ignored and return `None`.
    pub fn request_spin<O: WheelObserver + ?Sized>(&mut self, observer: &mut O) -> Option<SpinPlan> {
        if !self.can_spin() {
            log::debug!(
                "[wheel] spin request ignored (spinning={}, enabled={})",
                self.state.is_spinning,
                self.state.spin_enabled
            );
            return None;
        }
        self.state.is_spinning = true;
        self.state.spin_enabled = false;

        let segments = &self.config.segments;
        let chosen = self.selector.choose(segments);
        let plan = plan_spin(
            chosen,
            self.state.current_angle,
            segments.len(),
            self.config.base_rotation_deg,
            self.config.alignment,
        );
        if !self.animator.start(plan) {
            // Flags and animator disagree; keep the running spin.
            log::warn!("[wheel] animator already running; request dropped");
            return None;
        }
        log::info!(
            "[wheel] spin start index={} start={:.1} target={:.1}",
            plan.chosen_index,
            plan.start_angle,
            plan.target_angle
        );
        observer.on_spin_start(&plan);
        Some(plan)
    }

    /// Advance the running spin to `now_ms`. Returns `None` while idle.
    pub fn frame<O: WheelObserver + ?Sized>(
        &mut self,
        now_ms: f64,
        observer: &mut O,
    ) -> Option<FrameResult> {
        let result = self.animator.tick(now_ms)?;
        self.state.current_angle = result.angle;
        observer.on_angle_update(result.angle);
        for _ in 0..result.ticks {
            observer.on_tick();
        }
        if result.done {
            self.finish(result.chosen_index, observer);
        }
        Some(result)
    }

    fn finish<O: WheelObserver + ?Sized>(&mut self, chosen_index: usize, observer: &mut O) {
        self.state.current_angle = self.state.current_angle.rem_euclid(FULL_TURN_DEG);
        self.state.is_spinning = false;
        if self.config.rearm_after_spin {
            self.state.spin_enabled = true;
        }
        self.completed_spins += 1;
        match self.config.segments.get(chosen_index) {
            Some(segment) => {
                log::info!(
                    "[wheel] spin complete index={} label={:?} angle={:.1}",
                    chosen_index,
                    segment.label,
                    self.state.current_angle
                );
                observer.on_spin_complete(segment);
            }
            None => log::error!("[wheel] chosen index {} out of range", chosen_index),
        }
    }
}
