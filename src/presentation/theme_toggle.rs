use leptos::*;

use crate::domain::theme::Theme;

/// Button flipping between the dark and light theme
#[component]
pub fn ThemeToggle(#[prop(into)] theme: Signal<Theme>, on_change: Callback<Theme>) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            title=move || format!("Switch to {} theme", theme.get().toggled())
            on:click=move |_| on_change.call(theme.get_untracked().toggled())
        >
            {move || match theme.get() {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
