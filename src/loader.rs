use crate::constants::*;
use crate::dom;
use crate::overlay::ClickBlocker;
use instant::Instant;
use web_sys as web;
use wheel_core::{LoaderSchedule, PageConfig};

/// Put the page into its loading state: dim the body and block input on the
/// wheel controls until the loader is gone.
pub fn begin(document: &web::Document) -> ClickBlocker {
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(LOADING_CLASS);
    }
    let targets = [WHEEL_ID, SPIN_BUTTON_ID]
        .iter()
        .filter_map(|id| dom::expect_html_by_id(document, id))
        .collect();
    ClickBlocker::install(targets)
}

/// Tear the loading screen down once its minimum display time has passed.
/// Resolves when the screen is fully removed.
pub async fn finish(
    document: &web::Document,
    page: &PageConfig,
    shown_at: Instant,
) -> anyhow::Result<()> {
    let elapsed_ms = shown_at.elapsed().as_secs_f64() * 1000.0;
    let schedule = LoaderSchedule::after(page, elapsed_ms);
    log::info!(
        "[loader] page loaded after {:.0}ms; icon in {:.0}ms, screen in {:.0}ms",
        elapsed_ms,
        schedule.hide_icon_in_ms,
        schedule.hide_screen_in_ms
    );

    if let Some(icon) = dom::html_by_selector(document, LOADING_ICON_SELECTOR) {
        dom::set_timeout(schedule.hide_icon_in_ms, move || dom::set_display(&icon, "none"));
    }

    dom::sleep_ms(schedule.hide_screen_in_ms).await?;
    let screen = dom::expect_html_by_id(document, LOADING_SCREEN_ID);
    if let Some(s) = &screen {
        // Fade out via CSS
        _ = s.class_list().add_1(HIDDEN_CLASS);
    }
    if let Some(body) = document.body() {
        _ = body.class_list().remove_1(LOADING_CLASS);
    }

    dom::sleep_ms(schedule.remove_screen_in_ms).await?;
    if let Some(s) = &screen {
        dom::set_display(s, "none");
    }
    Ok(())
}
