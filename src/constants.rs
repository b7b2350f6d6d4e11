/// DOM hooks and audio tuning for the page front-end.
///
/// Ids and selectors match the markup the widget ships with; the audio values
/// keep the synthesized cues short and quiet enough to sit under page music.

// Elements looked up by id
pub const WHEEL_ID: &str = "wheel";
pub const SPIN_BUTTON_ID: &str = "spinButton";
pub const RESULT_TEXT_ID: &str = "resultText";
pub const CLAIM_BUTTON_ID: &str = "claimPrize";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const CLICK_OVERLAY_ID: &str = "clickOverlay";

// Elements looked up by selector
pub const LOADING_ICON_SELECTOR: &str = "#loading-screen video, dotlottie-player";
pub const WHEEL_CONTAINER_SELECTOR: &str = ".wheel-container";
pub const TICKER_SELECTOR: &str = ".ticker";

// CSS classes toggled by the widget
pub const LOADING_CLASS: &str = "loading";
pub const HIDDEN_CLASS: &str = "hidden";
pub const TICK_CLASS: &str = "tick";

// Config overrides are read from `data-wheel-<key>` on the wheel container
pub const CONFIG_ATTR_PREFIX: &str = "data-wheel-";

// Transparent click overlay stacked above the wheel
pub const CLICK_OVERLAY_Z_INDEX: &str = "10000";

// Audio: master bus
pub const MASTER_GAIN: f32 = 0.6;
pub const ENVELOPE_ATTACK_SEC: f64 = 0.004;
pub const SCHEDULE_AHEAD_SEC: f64 = 0.005;

// Audio: ticker click
pub const TICK_FREQ_HZ: f32 = 1800.0;
pub const TICK_PEAK_GAIN: f32 = 0.22;
pub const TICK_DURATION_SEC: f64 = 0.035;
pub const TICK_LOWPASS_HZ: f32 = 3200.0;

// Audio: win chime (C major arpeggio)
pub const WIN_NOTES_HZ: [f32; 4] = [523.25, 659.25, 783.99, 1046.5];
pub const WIN_NOTE_SPACING_SEC: f64 = 0.11;
pub const WIN_NOTE_DURATION_SEC: f64 = 0.45;
pub const WIN_PEAK_GAIN: f32 = 0.3;
