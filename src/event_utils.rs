use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false, once: false }
    }
}

/// Registered listener; the callback lives as long as the handle does
pub struct EventListenerHandle {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
    capture: bool,
}

impl EventListenerHandle {
    pub fn remove(self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Attach `cb` to `target`, casting each event to `E` first. Events that
/// are not an `E` are dropped.
pub fn event_listener_with_options<E>(
    target: &EventTarget,
    event_name: &'static str,
    options: &EventOptions,
    mut cb: impl FnMut(E) + 'static,
) -> Result<EventListenerHandle, wasm_bindgen::JsValue>
where
    E: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);
    opts.set_once(options.once);

    let callback = Closure::wrap(Box::new(move |ev: Event| {
        if let Ok(typed) = ev.dyn_into::<E>() {
            cb(typed);
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        callback.as_ref().unchecked_ref(),
        &opts,
    )?;

    Ok(EventListenerHandle { target: target.clone(), event_name, callback, capture: options.capture })
}
