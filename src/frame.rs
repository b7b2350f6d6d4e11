use crate::view::DomView;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wheel_core::Wheel;

pub struct SpinContext {
    pub wheel: Wheel,
    pub view: DomView,
}

impl SpinContext {
    /// One display refresh. Returns whether another frame is needed.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        let SpinContext { wheel, view } = self;
        match wheel.frame(timestamp_ms, view) {
            Some(result) => !result.done,
            None => false,
        }
    }

    /// Handle a spin gesture. Returns whether a spin actually started.
    pub fn request_spin(&mut self) -> bool {
        let SpinContext { wheel, view } = self;
        if let Some(a) = view.audio() {
            a.unlock();
        }
        wheel.request_spin(view).is_some()
    }
}

/// Gesture handler shared by the spin button and the click overlay. Extra
/// presses while a spin runs fall through the wheel's re-entrancy guard.
pub fn spin_trigger(ctx: Rc<RefCell<SpinContext>>) -> Rc<dyn Fn()> {
    Rc::new(move || {
        let started = ctx.borrow_mut().request_spin();
        if started {
            start_loop(ctx.clone());
        }
    })
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Self-scheduling `requestAnimationFrame` loop that runs until the spin is
/// done, then drops its own closure.
pub fn start_loop(ctx: Rc<RefCell<SpinContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let keep_going = ctx.borrow_mut().frame(timestamp);
        if keep_going {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_animation_frame(cb);
            }
        } else {
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_animation_frame(cb);
    }
}
