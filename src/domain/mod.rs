pub mod config;
pub mod dot_grid;
pub mod easing;
pub mod errors;
pub mod frame;
pub mod logging;
pub mod theme;
pub mod trail;
