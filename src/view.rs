use crate::audio::Cues;
use crate::constants::*;
use crate::dom;
use crate::text;
use web_sys as web;
use wheel_core::{PageConfig, Segment, SpinPlan, WheelObserver};

/// Render target for the wheel engine: CSS transform on the wheel image,
/// ticker pulse, result text and call-to-action, plus optional sound cues.
///
/// Every element is optional. A missing element is reported once at
/// construction and its updates are skipped.
pub struct DomView {
    wheel: Option<web::HtmlElement>,
    ticker: Option<web::HtmlElement>,
    result_text: Option<web::HtmlElement>,
    spin_button: Option<web::HtmlElement>,
    claim_button: Option<web::HtmlElement>,
    tick_pulse_ms: f64,
    audio: Option<Cues>,
}

impl DomView {
    pub fn new(document: &web::Document, page: &PageConfig, audio: Option<Cues>) -> Self {
        let ticker = dom::html_by_selector(document, TICKER_SELECTOR);
        if ticker.is_none() {
            log::warn!("[dom] {} not found", TICKER_SELECTOR);
        }
        Self {
            wheel: dom::expect_html_by_id(document, WHEEL_ID),
            ticker,
            result_text: dom::expect_html_by_id(document, RESULT_TEXT_ID),
            spin_button: dom::expect_html_by_id(document, SPIN_BUTTON_ID),
            claim_button: dom::expect_html_by_id(document, CLAIM_BUTTON_ID),
            tick_pulse_ms: page.tick_pulse_ms,
            audio,
        }
    }

    pub fn audio(&self) -> Option<&Cues> {
        self.audio.as_ref()
    }

    pub fn show_pre_spin(&self, message: &str) {
        if let Some(el) = &self.result_text {
            el.set_inner_text(message);
            dom::set_display(el, "block");
        }
    }

    fn pulse_ticker(&self) {
        if let Some(ticker) = &self.ticker {
            _ = ticker.class_list().add_1(TICK_CLASS);
            let ticker = ticker.clone();
            dom::set_timeout(self.tick_pulse_ms, move || {
                _ = ticker.class_list().remove_1(TICK_CLASS);
            });
        }
    }
}

impl WheelObserver for DomView {
    fn on_angle_update(&mut self, angle_deg: f64) {
        if let Some(wheel) = &self.wheel {
            dom::set_style(wheel, "transform", &text::wheel_transform(angle_deg));
        }
    }

    fn on_tick(&mut self) {
        self.pulse_ticker();
        if let Some(a) = &self.audio {
            a.tick();
        }
    }

    fn on_spin_start(&mut self, _plan: &SpinPlan) {
        if let Some(el) = &self.result_text {
            el.set_inner_text("");
        }
        if let Some(el) = &self.claim_button {
            dom::set_display(el, "none");
        }
    }

    fn on_spin_complete(&mut self, segment: &Segment) {
        if let Some(el) = &self.result_text {
            el.set_inner_text(&text::result_message(&segment.label));
            dom::set_display(el, "block");
        }
        if let Some(el) = &self.spin_button {
            dom::set_display(el, "none");
        }
        if let Some(el) = &self.claim_button {
            dom::set_display(el, "inline-block");
        }
        if let Some(a) = &self.audio {
            a.win();
        }
    }
}
