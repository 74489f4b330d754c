//! Wiring between a host surface, the controller and a frame sink.
//!
//! Everything the backdrop registers with its host is held as a
//! [`Subscription`] and cancelled on unmount, so no frame or pointer callback
//! outlives the component.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::backdrop_controller::{BackdropController, FrameUpdate, PointerInput};
use crate::domain::errors::{AppResult, RenderingResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_warn};

pub type FrameCallback = Box<dyn FnMut(f64)>;
pub type PointerCallback = Box<dyn FnMut(PointerInput)>;

/// A registration with the host that can be withdrawn
pub trait Subscription {
    fn cancel(self: Box<Self>);
}

/// Where the backdrop lives: a surface that reports its size, produces frame
/// ticks (timestamp in ms) and pointer input.
pub trait BackdropHost {
    /// Surface size in physical pixels
    fn surface_size(&self) -> (u32, u32);
    fn subscribe_frames(&self, callback: FrameCallback) -> AppResult<Box<dyn Subscription>>;
    fn subscribe_pointer(&self, callback: PointerCallback) -> AppResult<Box<dyn Subscription>>;
}

/// Consumer of frame updates, normally the GPU renderer
pub trait FrameSink {
    fn resize(&mut self, width: u32, height: u32);
    fn present(&mut self, update: &FrameUpdate<'_>) -> RenderingResult<()>;
}

pub struct MountedBackdrop {
    subscriptions: Vec<Box<dyn Subscription>>,
}

impl MountedBackdrop {
    pub fn mount<H, S>(
        host: Rc<H>,
        controller: Rc<RefCell<BackdropController>>,
        sink: Rc<RefCell<S>>,
    ) -> AppResult<Self>
    where
        H: BackdropHost + 'static,
        S: FrameSink + 'static,
    {
        let (width, height) = host.surface_size();
        if controller.borrow_mut().resize(width, height) {
            sink.borrow_mut().resize(width, height);
        }

        let mut mounted = Self { subscriptions: Vec::new() };

        let frame_controller = controller.clone();
        let frame_host = host.clone();
        let mut started_at: Option<f64> = None;
        let mut failed_frames: u64 = 0;
        mounted.subscriptions.push(host.subscribe_frames(Box::new(move |timestamp_ms| {
            let start = *started_at.get_or_insert(timestamp_ms);
            let (width, height) = frame_host.surface_size();
            let mut controller = frame_controller.borrow_mut();
            if controller.resize(width, height) {
                sink.borrow_mut().resize(width, height);
            }
            let update = controller.tick(((timestamp_ms - start) / 1000.0).max(0.0));
            if let Err(e) = sink.borrow_mut().present(&update) {
                if failed_frames == 0 {
                    log_warn!(LogComponent::Application("Lifecycle"), "frame {} not presented: {}", update.frame, e);
                }
                failed_frames += 1;
            }
        }))?);

        mounted.subscriptions.push(host.subscribe_pointer(Box::new(move |input| {
            controller.borrow_mut().pointer(input);
        }))?);

        log_debug!(LogComponent::Application("Lifecycle"), "backdrop mounted at {}x{}", width, height);
        Ok(mounted)
    }

    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn unmount(mut self) {
        self.cancel_all();
    }

    fn cancel_all(&mut self) {
        let count = self.subscriptions.len();
        for subscription in self.subscriptions.drain(..) {
            subscription.cancel();
        }
        if count > 0 {
            log_debug!(LogComponent::Application("Lifecycle"), "released {} host subscriptions", count);
        }
    }
}

impl Drop for MountedBackdrop {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
