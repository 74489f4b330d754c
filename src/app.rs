use leptos::*;
use std::rc::Rc;

use crate::domain::{logging::LogComponent, theme::Theme};
use crate::infrastructure::theme_store::{
    LocalStorageThemeStore, ThemeStore, apply_document_theme, initial_theme,
};
use crate::log_warn;
use crate::presentation::{DotShaderBackground, ThemeToggle};

const APP_STYLES: &str = r#"
html, body {
    margin: 0;
    min-height: 100vh;
}

.strategist-app {
    position: relative;
    min-height: 100vh;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    pointer-events: none;
}

html.dark .strategist-app { color: #f5f5f5; }
html.light .strategist-app { color: #111111; }

.dot-shader-background {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: auto;
}

.dot-shader-canvas {
    display: block;
    width: 100%;
    height: 100%;
    touch-action: none;
}

.app-header {
    position: relative;
    z-index: 1;
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 20px 32px;
}

.brand {
    font-weight: 600;
    letter-spacing: 0.02em;
}

.theme-toggle {
    pointer-events: auto;
    cursor: pointer;
    font-size: 18px;
    width: 40px;
    height: 40px;
    border-radius: 20px;
    border: 1px solid currentColor;
    background: transparent;
    color: inherit;
}

.hero {
    position: relative;
    z-index: 1;
    max-width: 720px;
    margin: 18vh auto 0;
    padding: 0 32px;
    text-align: center;
}

.hero h1 {
    font-size: 48px;
    line-height: 1.1;
    margin: 0 0 16px;
}

.hero p {
    font-size: 18px;
    opacity: 0.7;
}
"#;

/// Publish `next`, then persist it and retag `<html>`.
///
/// Storage and document failures are logged as warnings; the published theme
/// changes either way.
pub fn switch_theme(store: &dyn ThemeStore, next: Theme, publish: impl FnOnce(Theme)) {
    publish(next);
    if let Err(e) = store.save(next) {
        log_warn!(LogComponent::Presentation("App"), "{}", e);
    }
    if let Err(e) = apply_document_theme(next) {
        log_warn!(LogComponent::Presentation("App"), "{}", e);
    }
}

/// Application shell: backdrop, header with the theme toggle, hero copy.
///
/// The theme lives here and is handed down as a value plus a setter; nothing
/// below reads it from ambient state.
#[component]
pub fn App() -> impl IntoView {
    let store: Rc<dyn ThemeStore> = Rc::new(LocalStorageThemeStore::new());
    let (theme, set_theme_signal) = create_signal(initial_theme(store.as_ref()));

    if let Err(e) = apply_document_theme(theme.get_untracked()) {
        log_warn!(LogComponent::Presentation("App"), "{}", e);
    }

    let set_theme = Callback::new(move |next: Theme| {
        switch_theme(store.as_ref(), next, |theme| set_theme_signal.set(theme));
    });

    view! {
        <style>{APP_STYLES}</style>
        <div class="strategist-app">
            <DotShaderBackground theme=theme />
            <header class="app-header">
                <span class="brand">"AI Business Strategist"</span>
                <ThemeToggle theme=theme on_change=set_theme />
            </header>
            <main class="hero">
                <h1>"Turn a prompt into a strategy"</h1>
                <p>"Describe your market, your goals and your constraints."</p>
            </main>
        </div>
    }
}
