pub mod backdrop_controller;
pub mod lifecycle;

pub use backdrop_controller::{BackdropController, FrameUpdate, PointerInput};
pub use lifecycle::{BackdropHost, FrameSink, MountedBackdrop, Subscription};
