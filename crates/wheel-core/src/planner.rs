use crate::constants::FULL_TURN_DEG;

/// How the landing offset is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// `target = current + offset`. Lands correctly only while the wheel
    /// rests on a multiple of a full turn. This is the formula the legacy
    /// page used; `Absolute` gives the same target on a wheel's first spin.
    Relative,
    /// `target ≡ offset (mod 360)` whatever angle the wheel rests at.
    #[default]
    Absolute,
}

/// Per-spin plan. Owned by the animator while a spin is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub chosen_index: usize,
    pub start_angle: f64,
    pub target_angle: f64,
    /// Set by the first animation frame, not at request time, so scheduling
    /// latency does not eat into the spin.
    pub start_timestamp: Option<f64>,
}

#[inline]
pub fn degrees_per_segment(segment_count: usize) -> f64 {
    FULL_TURN_DEG / segment_count as f64
}

/// Extra rotation that brings the centre of `chosen_index` under the pointer.
#[inline]
pub fn landing_offset(chosen_index: usize, segment_count: usize, base_rotation_deg: f64) -> f64 {
    let dps = degrees_per_segment(segment_count);
    base_rotation_deg - chosen_index as f64 * dps - dps / 2.0
}

/// Smallest landing offset over all indices (the last segment).
#[inline]
pub fn min_landing_offset(segment_count: usize, base_rotation_deg: f64) -> f64 {
    landing_offset(segment_count.saturating_sub(1), segment_count, base_rotation_deg)
}

/// Minimum landing offset an alignment needs to keep every spin moving forward.
#[inline]
pub fn required_min_offset(alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Relative => f64::MIN_POSITIVE,
        Alignment::Absolute => FULL_TURN_DEG,
    }
}

pub fn plan_spin(
    chosen_index: usize,
    current_angle: f64,
    segment_count: usize,
    base_rotation_deg: f64,
    alignment: Alignment,
) -> SpinPlan {
    let offset = landing_offset(chosen_index, segment_count, base_rotation_deg);
    let start_angle = current_angle.rem_euclid(FULL_TURN_DEG);
    let target_angle = match alignment {
        Alignment::Relative => current_angle + offset,
        Alignment::Absolute => current_angle - start_angle + offset,
    };
    SpinPlan {
        chosen_index,
        start_angle,
        target_angle,
        start_timestamp: None,
    }
}
