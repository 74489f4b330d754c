use std::cell::{Cell, RefCell};
use std::rc::Rc;

use strategist_ui_wasm::application::lifecycle::{FrameCallback, PointerCallback};
use strategist_ui_wasm::application::{
    BackdropController, BackdropHost, FrameSink, FrameUpdate, MountedBackdrop, Subscription,
};
use strategist_ui_wasm::domain::config::{DotGridConfig, TrailConfig};
use strategist_ui_wasm::domain::errors::{AppError, AppResult, RenderingResult};
use strategist_ui_wasm::domain::logging::{LogComponent, LogLevel, MemoryLogger, init_logger};
use strategist_ui_wasm::domain::theme::Theme;

/// Host that hands its single frame callback back to the test
#[derive(Default)]
struct ManualHost {
    frame: Rc<RefCell<Option<FrameCallback>>>,
}

struct Noop;

impl Subscription for Noop {
    fn cancel(self: Box<Self>) {}
}

impl BackdropHost for ManualHost {
    fn surface_size(&self) -> (u32, u32) {
        (640, 480)
    }

    fn subscribe_frames(&self, callback: FrameCallback) -> AppResult<Box<dyn Subscription>> {
        *self.frame.borrow_mut() = Some(callback);
        Ok(Box::new(Noop))
    }

    fn subscribe_pointer(&self, _callback: PointerCallback) -> AppResult<Box<dyn Subscription>> {
        Ok(Box::new(Noop))
    }
}

struct LostSurface {
    attempts: Rc<Cell<u32>>,
}

impl FrameSink for LostSurface {
    fn resize(&mut self, _width: u32, _height: u32) {}

    fn present(&mut self, _update: &FrameUpdate<'_>) -> RenderingResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(AppError::RenderingError("device lost".to_string()))
    }
}

#[test]
fn failing_frames_keep_ticking_and_warn_once() {
    let logger: &'static MemoryLogger = Box::leak(Box::new(MemoryLogger::new(LogLevel::Warn)));
    assert!(init_logger(Box::new(logger)));

    let host = Rc::new(ManualHost::default());
    let frame = host.frame.clone();
    let attempts = Rc::new(Cell::new(0));
    let config = DotGridConfig {
        trail: TrailConfig { size: 32, ..TrailConfig::default() },
        ..DotGridConfig::default()
    };
    let controller = Rc::new(RefCell::new(BackdropController::new(config, Theme::Light).expect("valid config")));
    let sink = Rc::new(RefCell::new(LostSurface { attempts: attempts.clone() }));

    let _mounted = match MountedBackdrop::mount(host, controller.clone(), sink) {
        Ok(mounted) => mounted,
        Err(e) => panic!("mount failed: {}", e),
    };

    for i in 0..5 {
        if let Some(callback) = frame.borrow_mut().as_mut() {
            callback(i as f64 * 16.0);
        }
    }

    assert_eq!(attempts.get(), 5);
    assert_eq!(controller.borrow().frame(), 5);
    assert_eq!(logger.count(LogLevel::Warn, &LogComponent::Application("Lifecycle")), 1);
    let entries = logger.entries();
    assert!(entries[0].message.contains("device lost"));
}
