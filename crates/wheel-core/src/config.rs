//! Adjustable parameters for a wheel and the page around it.
//!
//! Defaults reproduce the promotional page. The web front-end overrides them
//! from `data-*` attributes through [`WidgetConfig::apply`].

use crate::animator::TickPolicy;
use crate::constants::*;
use crate::error::WheelError;
use crate::planner::{min_landing_offset, required_min_offset, Alignment};
use crate::segment::SegmentTable;

#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    pub segments: SegmentTable,
    pub spin_duration_ms: f64,
    /// Full turns plus the alignment that puts a segment centre under the
    /// pointer. Tuned for the pointer position; re-derive it when the segment
    /// count or the pointer moves.
    pub base_rotation_deg: f64,
    pub alignment: Alignment,
    pub tick_policy: TickPolicy,
    /// Re-open spin permission after each completed spin.
    pub rearm_after_spin: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            segments: SegmentTable::default(),
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            base_rotation_deg: DEFAULT_BASE_ROTATION_DEG,
            alignment: Alignment::default(),
            tick_policy: TickPolicy::default(),
            rearm_after_spin: false,
        }
    }
}

impl WheelConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        if !self.spin_duration_ms.is_finite() || self.spin_duration_ms <= 0.0 {
            return Err(WheelError::InvalidDuration(self.spin_duration_ms));
        }
        let required = required_min_offset(self.alignment);
        let min_offset = min_landing_offset(self.segments.len(), self.base_rotation_deg);
        if !self.base_rotation_deg.is_finite()
            || self.base_rotation_deg > MAX_BASE_ROTATION_DEG
            || min_offset < required
        {
            return Err(WheelError::InvalidBaseRotation {
                base: self.base_rotation_deg,
                min_offset: required,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub min_loading_ms: f64,
    pub min_icon_ms: f64,
    pub loader_fade_ms: f64,
    pub tick_pulse_ms: f64,
    pub enable_click_overlay: bool,
    pub enable_audio: bool,
    pub claim_url: String,
    pub pre_spin_text: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            min_loading_ms: MIN_LOADING_SCREEN_MS,
            min_icon_ms: MIN_LOADING_ICON_MS,
            loader_fade_ms: LOADER_FADE_MS,
            tick_pulse_ms: TICK_PULSE_MS,
            enable_click_overlay: true,
            enable_audio: true,
            claim_url: DEFAULT_CLAIM_URL.to_string(),
            pre_spin_text: DEFAULT_PRE_SPIN_TEXT.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetConfig {
    pub wheel: WheelConfig,
    pub page: PageConfig,
}

/// Keys accepted by [`WidgetConfig::apply`], in the spelling used for
/// `data-*` attributes.
pub const SETTING_KEYS: &[&str] = &[
    "segments",
    "duration-ms",
    "base-rotation",
    "alignment",
    "tick-policy",
    "rearm",
    "min-loading-ms",
    "min-icon-ms",
    "fade-ms",
    "click-overlay",
    "audio",
    "claim-url",
    "pre-spin-text",
];

fn invalid(key: &str, value: &str) -> WheelError {
    WheelError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_ms(key: &str, value: &str) -> Result<f64, WheelError> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(invalid(key, value)),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, WheelError> {
    match value.trim() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

impl WidgetConfig {
    /// Apply one string override. On error the config is left unchanged.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        let mut wheel = self.wheel.clone();
        match key {
            "segments" => wheel.segments = value.parse()?,
            "duration-ms" => {
                wheel.spin_duration_ms = value.trim().parse().map_err(|_| invalid(key, value))?
            }
            "base-rotation" => {
                wheel.base_rotation_deg = value.trim().parse().map_err(|_| invalid(key, value))?
            }
            "alignment" => {
                wheel.alignment = match value.trim() {
                    "relative" => Alignment::Relative,
                    "absolute" => Alignment::Absolute,
                    _ => return Err(invalid(key, value)),
                }
            }
            "tick-policy" => {
                wheel.tick_policy = match value.trim() {
                    "catch-up" => TickPolicy::CatchUp,
                    "single" => TickPolicy::SinglePerFrame,
                    _ => return Err(invalid(key, value)),
                }
            }
            "rearm" => wheel.rearm_after_spin = parse_flag(key, value)?,
            "min-loading-ms" => self.page.min_loading_ms = parse_ms(key, value)?,
            "min-icon-ms" => self.page.min_icon_ms = parse_ms(key, value)?,
            "fade-ms" => self.page.loader_fade_ms = parse_ms(key, value)?,
            "click-overlay" => self.page.enable_click_overlay = parse_flag(key, value)?,
            "audio" => self.page.enable_audio = parse_flag(key, value)?,
            "claim-url" => self.page.claim_url = value.trim().to_string(),
            "pre-spin-text" => self.page.pre_spin_text = value.to_string(),
            _ => return Err(WheelError::UnknownSetting(key.to_string())),
        }
        // Wheel settings interact (segment count vs base rotation), so a
        // change only sticks if the whole wheel config is still valid.
        wheel.validate()?;
        self.wheel = wheel;
        Ok(())
    }
}
