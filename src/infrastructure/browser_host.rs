//! Browser side of [`BackdropHost`]: a canvas element, `requestAnimationFrame`
//! and pointer listeners on that canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, PointerEvent, Window};

use crate::application::backdrop_controller::PointerInput;
use crate::application::lifecycle::{BackdropHost, FrameCallback, PointerCallback, Subscription};
use crate::domain::errors::{AppError, AppResult};
use crate::event_utils::{EventListenerHandle, EventOptions, event_listener_with_options};

pub struct CanvasHost {
    canvas: HtmlCanvasElement,
}

impl CanvasHost {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    fn window() -> AppResult<Window> {
        web_sys::window().ok_or_else(|| AppError::HostError("Window not available".to_string()))
    }
}

impl BackdropHost for CanvasHost {
    fn surface_size(&self) -> (u32, u32) {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = (self.canvas.client_width().max(0) as f64 * dpr).round() as u32;
        let height = (self.canvas.client_height().max(0) as f64 * dpr).round() as u32;
        (width, height)
    }

    fn subscribe_frames(&self, callback: FrameCallback) -> AppResult<Box<dyn Subscription>> {
        AnimationFrameLoop::start(Self::window()?, callback).map(|l| Box::new(l) as Box<dyn Subscription>)
    }

    fn subscribe_pointer(&self, callback: PointerCallback) -> AppResult<Box<dyn Subscription>> {
        let callback = Rc::new(RefCell::new(callback));
        let options = EventOptions::default();
        let target: &web_sys::EventTarget = self.canvas.as_ref();

        let move_canvas = self.canvas.clone();
        let move_callback = callback.clone();
        let on_move = event_listener_with_options(target, "pointermove", &options, move |ev: PointerEvent| {
            let rect = move_canvas.get_bounding_client_rect();
            let offset = [(ev.client_x() as f64 - rect.left()) as f32, (ev.client_y() as f64 - rect.top()) as f32];
            let surface = [rect.width() as f32, rect.height() as f32];
            (&mut *move_callback.borrow_mut())(PointerInput::Moved { offset, surface });
        })
        .map_err(listener_error)?;

        let on_leave = event_listener_with_options(target, "pointerleave", &options, move |_: PointerEvent| {
            (&mut *callback.borrow_mut())(PointerInput::Left);
        })
        .map_err(listener_error);
        let on_leave = match on_leave {
            Ok(handle) => handle,
            Err(e) => {
                on_move.remove();
                return Err(e);
            }
        };

        Ok(Box::new(PointerListeners { handles: vec![on_move, on_leave] }))
    }
}

fn listener_error(e: wasm_bindgen::JsValue) -> AppError {
    AppError::HostError(format!("addEventListener failed: {:?}", e))
}

struct PointerListeners {
    handles: Vec<EventListenerHandle>,
}

impl Subscription for PointerListeners {
    fn cancel(self: Box<Self>) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` chain.
///
/// The closure holds a reference to its own slot to request the next frame;
/// `cancel` empties the slot, which breaks that cycle and frees it.
struct AnimationFrameLoop {
    window: Window,
    request_id: Rc<Cell<Option<i32>>>,
    slot: Rc<RefCell<Option<FrameClosure>>>,
}

impl AnimationFrameLoop {
    fn start(window: Window, mut callback: FrameCallback) -> AppResult<Self> {
        let slot: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));

        let next_slot = slot.clone();
        let next_id = request_id.clone();
        let next_window = window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            next_id.set(None);
            callback(timestamp);
            if let Some(next) = next_slot.borrow().as_ref() {
                next_id.set(next_window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
            }
        }) as Box<dyn FnMut(f64)>));

        let first = slot
            .borrow()
            .as_ref()
            .map(|f| window.request_animation_frame(f.as_ref().unchecked_ref()))
            .transpose();
        match first {
            Ok(id) => request_id.set(id),
            Err(e) => {
                slot.borrow_mut().take();
                return Err(AppError::HostError(format!("requestAnimationFrame failed: {:?}", e)));
            }
        }

        Ok(Self { window, request_id, slot })
    }
}

impl Subscription for AnimationFrameLoop {
    fn cancel(self: Box<Self>) {
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }
}
