use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Install logging, then mount the app on `<body>`
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "Strategist UI starting");

    leptos::mount_to_body(App);
}
