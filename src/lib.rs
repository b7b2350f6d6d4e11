#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wheel_core::{OutcomeSelector, PageConfig, Wheel};

mod audio;
mod config;
mod constants;
mod dom;
mod frame;
mod loader;
mod overlay;
mod text;
mod view;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("prize-wheel starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener_once(&document, "DOMContentLoaded", move || run_setup(doc));
    } else {
        run_setup(document);
    }
    Ok(())
}

fn run_setup(document: web::Document) {
    if let Err(e) = setup(document) {
        log::error!("init error: {:?}", e);
    }
}

fn setup(document: web::Document) -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[wheel] setup already ran; ignoring");
        return Ok(());
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let shown_at = Instant::now();

    let config = config::read(&document);
    let wheel = Wheel::new(config.wheel.clone(), OutcomeSelector::from_entropy())
        .context("wheel configuration")?;
    log::info!(
        "[wheel] {} segments, duration {:.0}ms, base rotation {:.1}°",
        wheel.segments().len(),
        config.wheel.spin_duration_ms,
        config.wheel.base_rotation_deg
    );

    let audio = if config.page.enable_audio {
        match audio::Cues::new() {
            Ok(cues) => Some(cues),
            Err(e) => {
                log::warn!("[audio] disabled: {:?}", e);
                None
            }
        }
    } else {
        None
    };
    let view = view::DomView::new(&document, &config.page, audio);
    view.show_pre_spin(&config.page.pre_spin_text);
    let ctx = Rc::new(RefCell::new(frame::SpinContext { wheel, view }));

    wire_audio_unlock(&document, &ctx);
    wire_claim_button(&document, config.page.claim_url.clone());

    let blocker = loader::begin(&document);
    let already_loaded = document.ready_state() == "complete";
    let page = config.page;
    let on_load = move || {
        spawn_local(async move {
            if let Err(e) = loader::finish(&document, &page, shown_at).await {
                log::error!("[loader] {:?}", e);
            }
            blocker.remove();
            enable_spinning(&document, &page, ctx);
        });
    };
    if already_loaded {
        on_load();
    } else {
        dom::add_listener_once(&window, "load", on_load);
    }
    Ok(())
}

/// Readiness gate: runs once the loading screen is gone.
fn enable_spinning(document: &web::Document, page: &PageConfig, ctx: Rc<RefCell<frame::SpinContext>>) {
    ctx.borrow_mut().wheel.enable_spin();
    let trigger = frame::spin_trigger(ctx);

    if let Some(button) = dom::expect_html_by_id(document, SPIN_BUTTON_ID) {
        let on_click = trigger.clone();
        dom::add_listener(&button, "click", move |_| on_click());
        let on_touch = trigger.clone();
        dom::add_passive_listener(&button, "touchstart", true, move |_| on_touch());
    }
    if page.enable_click_overlay {
        overlay::create_click_overlay(document, trigger);
    }
    log::info!("[wheel] ready to spin");
}

// The first gesture anywhere on the page unlocks audio for later cues.
fn wire_audio_unlock(document: &web::Document, ctx: &Rc<RefCell<frame::SpinContext>>) {
    if ctx.borrow().view.audio().is_none() {
        return;
    }
    for event in ["touchstart", "click"] {
        let ctx = ctx.clone();
        dom::add_passive_listener(document, event, true, move |_| {
            if let Ok(c) = ctx.try_borrow() {
                if let Some(a) = c.view.audio() {
                    a.unlock();
                }
            }
        });
    }
}

fn wire_claim_button(document: &web::Document, claim_url: String) {
    if let Some(button) = dom::expect_html_by_id(document, CLAIM_BUTTON_ID) {
        dom::add_listener(&button, "click", move |_| {
            log::info!("[wheel] claim -> {}", claim_url);
            if let Some(w) = web::window() {
                if let Err(e) = w.location().set_href(&claim_url) {
                    log::error!("redirect error: {:?}", e);
                }
            }
        });
    }
}
