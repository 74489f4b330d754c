use leptos::html::Canvas;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::application::{BackdropController, MountedBackdrop};
use crate::domain::{config::DotGridConfig, logging::LogComponent, theme::Theme};
use crate::log_warn;

/// Full-viewport animated dot grid reacting to the pointer and the theme.
///
/// The container carries the palette's background color, so without a GPU
/// surface the page still gets a flat backdrop.
#[component]
pub fn DotShaderBackground(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let controller = match BackdropController::new(DotGridConfig::default(), theme.get_untracked()) {
        Ok(controller) => Some(Rc::new(RefCell::new(controller))),
        Err(e) => {
            log_warn!(LogComponent::Presentation("DotShaderBackground"), "{}; keeping flat background", e);
            None
        }
    };
    let mounted: Rc<RefCell<Option<MountedBackdrop>>> = Rc::new(RefCell::new(None));
    let alive = Rc::new(Cell::new(true));

    if let Some(controller) = controller {
        {
            let controller = controller.clone();
            create_effect(move |_| {
                let next = theme.get();
                controller.borrow_mut().set_theme(next);
            });
        }

        let mounted = mounted.clone();
        let alive = alive.clone();
        canvas_ref.on_load(move |canvas| {
            let canvas: web_sys::HtmlCanvasElement = (*canvas).clone();
            start_backdrop(canvas, controller, mounted, alive);
        });
    }

    on_cleanup(move || {
        alive.set(false);
        if let Some(backdrop) = mounted.borrow_mut().take() {
            backdrop.unmount();
        }
    });

    view! {
        <div
            class="dot-shader-background"
            style:background-color=move || theme.get().palette().bg_color.to_hex()
        >
            <canvas node_ref=canvas_ref class="dot-shader-canvas" />
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn start_backdrop(
    canvas: web_sys::HtmlCanvasElement,
    controller: Rc<RefCell<BackdropController>>,
    mounted: Rc<RefCell<Option<MountedBackdrop>>>,
    alive: Rc<Cell<bool>>,
) {
    use crate::application::BackdropHost;
    use crate::infrastructure::{browser_host::CanvasHost, rendering::DotGridRenderer};
    use crate::log_info;

    if !DotGridRenderer::is_webgpu_supported() {
        log_warn!(LogComponent::Presentation("DotShaderBackground"), "WebGPU unavailable, keeping flat background");
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let host = Rc::new(CanvasHost::new(canvas.clone()));
        let (width, height) = host.surface_size();
        let trail_size = controller.borrow().config().trail.size;

        let renderer = match DotGridRenderer::new(canvas, width, height, trail_size).await {
            Ok(renderer) => renderer,
            Err(e) => {
                log_warn!(LogComponent::Presentation("DotShaderBackground"), "{}; keeping flat background", e);
                return;
            }
        };

        // unmounted while the device was being requested
        if !alive.get() {
            return;
        }

        match MountedBackdrop::mount(host, controller, Rc::new(RefCell::new(renderer))) {
            Ok(backdrop) => {
                *mounted.borrow_mut() = Some(backdrop);
                log_info!(LogComponent::Presentation("DotShaderBackground"), "dot grid running");
            }
            Err(e) => {
                log_warn!(LogComponent::Presentation("DotShaderBackground"), "{}; keeping flat background", e);
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn start_backdrop(
    _canvas: web_sys::HtmlCanvasElement,
    _controller: Rc<RefCell<BackdropController>>,
    _mounted: Rc<RefCell<Option<MountedBackdrop>>>,
    _alive: Rc<Cell<bool>>,
) {
}
