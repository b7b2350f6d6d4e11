use crate::config::PageConfig;

/// Delays for the loading-screen teardown, measured from the moment the page
/// finished loading. The screen is only removed (and spinning enabled) after
/// `hide_screen_in_ms + remove_screen_in_ms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoaderSchedule {
    pub hide_icon_in_ms: f64,
    pub hide_screen_in_ms: f64,
    pub remove_screen_in_ms: f64,
}

impl LoaderSchedule {
    /// Schedule given `elapsed_ms` already spent since the loader appeared.
    pub fn after(page: &PageConfig, elapsed_ms: f64) -> Self {
        let elapsed = elapsed_ms.max(0.0);
        Self {
            hide_icon_in_ms: (page.min_icon_ms - elapsed).max(0.0),
            hide_screen_in_ms: (page.min_loading_ms - elapsed).max(0.0),
            remove_screen_in_ms: page.loader_fade_ms.max(0.0),
        }
    }

    #[inline]
    pub fn ready_in_ms(&self) -> f64 {
        self.hide_screen_in_ms + self.remove_screen_in_ms
    }
}
