pub mod browser_host;
pub mod rendering;
pub mod services;
pub mod theme_store;
