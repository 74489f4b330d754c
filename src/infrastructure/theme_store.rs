//! Theme preference persistence and the document-level theme class.

use std::cell::RefCell;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::theme::{THEME_STORAGE_KEY, Theme};
use strum::IntoEnumIterator;

pub trait ThemeStore {
    /// Raw stored value, if any
    fn load(&self) -> Option<String>;
    fn save(&self, theme: Theme) -> AppResult<()>;
}

/// `window.localStorage`, keyed by [`THEME_STORAGE_KEY`]
pub struct LocalStorageThemeStore {
    key: &'static str,
}

impl Default for LocalStorageThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageThemeStore {
    pub fn new() -> Self {
        Self { key: THEME_STORAGE_KEY }
    }

    fn storage(&self) -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| AppError::StorageError("Window not available".to_string()))?
            .local_storage()
            .map_err(|e| AppError::StorageError(format!("localStorage denied: {:?}", e)))?
            .ok_or_else(|| AppError::StorageError("localStorage not available".to_string()))
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        self.storage().ok()?.get_item(self.key).ok().flatten()
    }

    fn save(&self, theme: Theme) -> AppResult<()> {
        self.storage()?
            .set_item(self.key, theme.as_ref())
            .map_err(|e| AppError::StorageError(format!("failed to persist theme: {:?}", e)))
    }
}

/// In-process store for hosts without `localStorage`
#[derive(Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_string())) }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, theme: Theme) -> AppResult<()> {
        *self.value.borrow_mut() = Some(theme.to_string());
        Ok(())
    }
}

/// `prefers-color-scheme: light` media query; false when unavailable
pub fn prefers_light_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn initial_theme(store: &dyn ThemeStore) -> Theme {
    Theme::resolve_initial(store.load().as_deref(), prefers_light_scheme())
}

/// Put exactly one theme class on `<html>`
pub fn apply_document_theme(theme: Theme) -> AppResult<()> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| AppError::HostError("Document root not available".to_string()))?;
    let classes = root.class_list();
    for other in Theme::iter().filter(|t| *t != theme) {
        classes
            .remove_1(other.as_ref())
            .map_err(|e| AppError::HostError(format!("classList.remove failed: {:?}", e)))?;
    }
    classes
        .add_1(theme.as_ref())
        .map_err(|e| AppError::HostError(format!("classList.add failed: {:?}", e)))
}
