use strategist_ui_wasm::domain::theme::Theme;
use strategist_ui_wasm::infrastructure::theme_store::{MemoryThemeStore, ThemeStore};

fn resolve(store: &dyn ThemeStore, prefers_light: bool) -> Theme {
    Theme::resolve_initial(store.load().as_deref(), prefers_light)
}

#[test]
fn stored_preference_wins() {
    assert_eq!(resolve(&MemoryThemeStore::with_value("light"), false), Theme::Light);
    assert_eq!(resolve(&MemoryThemeStore::with_value("dark"), true), Theme::Dark);
    assert_eq!(resolve(&MemoryThemeStore::with_value(" Light "), false), Theme::Light);
}

#[test]
fn color_scheme_hint_when_nothing_is_stored() {
    assert_eq!(resolve(&MemoryThemeStore::default(), true), Theme::Light);
    assert_eq!(resolve(&MemoryThemeStore::default(), false), Theme::Dark);
}

#[test]
fn unknown_values_fall_through() {
    assert_eq!(resolve(&MemoryThemeStore::with_value("system"), true), Theme::Light);
    assert_eq!(resolve(&MemoryThemeStore::with_value(""), false), Theme::Dark);
}

#[test]
fn saved_theme_is_loaded_back() {
    let store = MemoryThemeStore::default();
    assert!(store.save(Theme::Light).is_ok());
    assert_eq!(store.load().as_deref(), Some("light"));
    assert!(store.save(Theme::Light.toggled()).is_ok());
    assert_eq!(resolve(&store, true), Theme::Dark);
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use strategist_ui_wasm::domain::theme::{THEME_STORAGE_KEY, Theme};
    use strategist_ui_wasm::infrastructure::theme_store::{
        LocalStorageThemeStore, ThemeStore, apply_document_theme,
    };
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trip() {
        let store = LocalStorageThemeStore::new();
        store.save(Theme::Light).unwrap();
        let raw = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item(THEME_STORAGE_KEY)
            .unwrap();
        assert_eq!(raw.as_deref(), Some("light"));
        assert_eq!(store.load().as_deref(), Some("light"));
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load().as_deref(), Some("dark"));
    }

    #[wasm_bindgen_test]
    fn document_carries_exactly_one_theme_class() {
        let root = web_sys::window().unwrap().document().unwrap().document_element().unwrap();
        apply_document_theme(Theme::Dark).unwrap();
        apply_document_theme(Theme::Light).unwrap();
        let classes = root.class_list();
        assert!(classes.contains("light"));
        assert!(!classes.contains("dark"));
    }
}
