use crate::constants::*;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Swallows clicks and taps on the wheel controls while the loading screen is
/// up. Keeps its handler alive so the listeners can be removed again.
pub struct ClickBlocker {
    targets: Vec<web::HtmlElement>,
    handler: Closure<dyn FnMut(web::Event)>,
}

impl ClickBlocker {
    pub fn install(targets: Vec<web::HtmlElement>) -> Self {
        let handler = Closure::wrap(Box::new(|ev: web::Event| {
            ev.prevent_default();
            ev.stop_propagation();
        }) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        for el in &targets {
            _ = el.add_event_listener_with_callback_and_bool(
                "click",
                handler.as_ref().unchecked_ref(),
                true,
            );
            _ = el.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                handler.as_ref().unchecked_ref(),
                &opts,
            );
        }
        log::info!("[overlay] blocking input on {} element(s)", targets.len());
        Self { targets, handler }
    }

    pub fn remove(self) {
        for el in &self.targets {
            _ = el.remove_event_listener_with_callback_and_bool(
                "click",
                self.handler.as_ref().unchecked_ref(),
                true,
            );
            _ = el.remove_event_listener_with_callback(
                "touchstart",
                self.handler.as_ref().unchecked_ref(),
            );
        }
        log::info!("[overlay] input unblocked");
    }
}

/// Cover `.wheel-container` with a transparent layer that spins on click or
/// tap, so the whole wheel acts as a button. Returns `None` (with a warning)
/// when the container is missing.
pub fn create_click_overlay(
    document: &web::Document,
    on_press: Rc<dyn Fn()>,
) -> Option<web::HtmlElement> {
    let Some(container) = dom::html_by_selector(document, WHEEL_CONTAINER_SELECTOR) else {
        log::warn!("[overlay] wheel container not found");
        return None;
    };
    let overlay = match document
        .create_element("div")
        .map(|el| el.dyn_into::<web::HtmlElement>())
    {
        Ok(Ok(el)) => el,
        _ => {
            log::warn!("[overlay] could not create overlay element");
            return None;
        }
    };
    overlay.set_id(CLICK_OVERLAY_ID);
    for (property, value) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("background", "rgba(0,0,0,0)"),
        ("z-index", CLICK_OVERLAY_Z_INDEX),
        ("cursor", "pointer"),
    ] {
        dom::set_style(&overlay, property, value);
    }
    // The overlay is positioned against the container.
    dom::set_style(&container, "position", "relative");
    if let Err(e) = container.append_child(&overlay) {
        log::warn!("[overlay] append failed: {:?}", e);
        return None;
    }

    let press = on_press.clone();
    dom::add_listener(&overlay, "click", move |_| {
        log::debug!("[overlay] click");
        press();
    });
    dom::add_passive_listener(&overlay, "touchstart", true, move |_| {
        log::debug!("[overlay] touchstart");
        on_press();
    });
    Some(overlay)
}
