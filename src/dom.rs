use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_by_selector(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Like [`html_by_id`] but warns when the element is missing.
pub fn expect_html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    let el = html_by_id(document, id);
    if el.is_none() {
        log::warn!("[dom] #{} not found", id);
    }
    el
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_display(el: &web::HtmlElement, value: &str) {
    set_style(el, "display", value);
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Touch listeners need an explicit `passive` flag: passive ones scroll
/// smoothly, non-passive ones may call `preventDefault`.
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    passive: bool,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(passive);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Listener for events that fire at most once (`load`, `DOMContentLoaded`).
pub fn add_listener_once(target: &web::EventTarget, event: &str, handler: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(handler);
    _ = target.add_event_listener_with_callback(event, callback.unchecked_ref());
}

pub fn set_timeout(ms: f64, handler: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let callback = Closure::once_into_js(handler);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            ms.max(0.0) as i32,
        );
    }
}

pub async fn sleep_ms(ms: f64) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms.max(0.0) as i32);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("timer error: {:?}", e))?;
    Ok(())
}
