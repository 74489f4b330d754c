use strategist_ui_wasm::application::{BackdropController, PointerInput};
use strategist_ui_wasm::domain::config::DotGridConfig;
use strategist_ui_wasm::domain::theme::{DARK_PALETTE, LIGHT_PALETTE, Rgb, Theme, ThemePalette};
use strum::IntoEnumIterator;

fn describe(palette: &ThemePalette) -> String {
    format!("{} on {} at {}", palette.dot_color.to_hex(), palette.bg_color.to_hex(), palette.dot_opacity)
}

#[test]
fn palettes_match_documented_constants() {
    insta::assert_snapshot!(describe(&Theme::Dark.palette()), @"#FFFFFF on #121212 at 0.025");
    insta::assert_snapshot!(describe(&Theme::Light.palette()), @"#000000 on #FFFFFF at 0.4");
}

#[test]
fn every_theme_maps_to_its_triple() {
    for theme in Theme::iter() {
        let expected = match theme {
            Theme::Dark => (Rgb::from_u32(0xFFFFFF), Rgb::from_u32(0x121212), 0.025),
            Theme::Light => (Rgb::from_u32(0x000000), Rgb::from_u32(0xFFFFFF), 0.4),
        };
        let palette = theme.palette();
        assert_eq!((palette.dot_color, palette.bg_color, palette.dot_opacity), expected);
    }
}

#[test]
fn switching_theme_replaces_the_whole_palette() {
    let mut controller = BackdropController::new(DotGridConfig::default(), Theme::Dark).expect("valid config");
    assert_eq!(controller.palette(), DARK_PALETTE);

    controller.set_theme(Theme::Light);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.palette(), LIGHT_PALETTE);

    let frame = controller.tick(0.0).uniforms;
    assert_eq!(frame.dot_color, LIGHT_PALETTE.dot_color.to_linear());
    assert_eq!(frame.bg_color, LIGHT_PALETTE.bg_color.to_linear());
    assert_eq!(frame.dot_opacity, LIGHT_PALETTE.dot_opacity);

    controller.set_theme(Theme::Dark);
    let frame = controller.tick(0.016).uniforms;
    assert_eq!(frame.dot_color, DARK_PALETTE.dot_color.to_linear());
    assert_eq!(frame.bg_color, DARK_PALETTE.bg_color.to_linear());
    assert_eq!(frame.dot_opacity, DARK_PALETTE.dot_opacity);
}

#[test]
fn theme_switch_keeps_grid_and_trail() {
    let mut controller = BackdropController::new(DotGridConfig::default(), Theme::Dark).expect("valid config");
    controller.resize(800, 600);
    controller.pointer(PointerInput::Moved { offset: [400.0, 300.0], surface: [800.0, 600.0] });
    controller.tick(0.0);
    let active = controller.trail().active_texels();
    assert!(active > 0);
    let grid = controller.grid();

    controller.set_theme(Theme::Light);

    assert_eq!(controller.grid(), grid);
    assert_eq!(controller.trail().active_texels(), active);
}

#[test]
fn toggle_flips_between_the_two_themes() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}
