use strategist_ui_wasm::application::{BackdropController, PointerInput};
use strategist_ui_wasm::domain::config::{DotGridConfig, TrailConfig};
use strategist_ui_wasm::domain::dot_grid::DotGrid;
use strategist_ui_wasm::domain::theme::{DARK_PALETTE, Theme};

fn config() -> DotGridConfig {
    DotGridConfig {
        trail: TrailConfig { size: 64, max_age: 30, ..TrailConfig::default() },
        ..DotGridConfig::default()
    }
}

#[test]
fn uniforms_are_a_pure_function_of_inputs() {
    let mut a = BackdropController::new(config(), Theme::Dark).expect("valid config");
    let mut b = BackdropController::new(config(), Theme::Dark).expect("valid config");
    a.resize(1280, 720);
    b.resize(1280, 720);
    for elapsed in [0.0, 0.016, 0.5, 12.25] {
        assert_eq!(a.tick(elapsed).uniforms, b.tick(elapsed).uniforms);
    }

    let frame = a.tick(3.0).uniforms;
    assert_eq!(frame.resolution, [1280.0, 720.0]);
    assert_eq!(frame.time, 3.0);
    assert_eq!(frame.grid_size, 120.0);
    assert_eq!(frame.rotation, 0.0);
}

#[test]
fn frame_counter_advances_once_per_tick() {
    let mut controller = BackdropController::new(config(), Theme::Dark).expect("valid config");
    assert_eq!(controller.frame(), 0);
    assert_eq!(controller.tick(0.0).frame, 1);
    assert_eq!(controller.tick(0.0).frame, 2);
    assert_eq!(controller.frame(), 2);
}

#[test]
fn trail_is_uploaded_only_while_it_changes() {
    let mut controller = BackdropController::new(config(), Theme::Dark).expect("valid config");
    controller.resize(800, 600);
    assert!(controller.tick(0.0).trail.is_none());

    controller.pointer(PointerInput::Moved { offset: [400.0, 300.0], surface: [800.0, 600.0] });
    let update = controller.tick(0.016);
    assert_eq!(update.trail_size, 64);
    assert_eq!(update.trail.map(|t| t.len()), Some(64 * 64));

    // decaying for max_age frames, then one last upload of zeros
    let mut uploads = 0;
    for _ in 0..40 {
        if controller.tick(0.0).trail.is_some() {
            uploads += 1;
        }
    }
    assert!(uploads >= 29 && uploads <= 31, "{} uploads", uploads);
    assert!(controller.tick(0.0).trail.is_none());
    assert_eq!(controller.trail().active_texels(), 0);
}

#[test]
fn touched_cells_grow_and_brighten() {
    let grid = DotGrid::new([1200.0, 1200.0], 120, 0.0);
    let frag = [249.5, 249.5];
    let bg = DARK_PALETTE.bg_color.to_srgb();

    let calm = grid.shade(frag, 0.0, &DARK_PALETTE, |_| 0.0);
    assert_eq!(calm, bg);

    let touched = grid.shade(frag, 0.0, &DARK_PALETTE, |_| 0.5);
    for channel in 0..3 {
        assert!(touched[channel] > bg[channel]);
    }
}

#[test]
fn trail_is_read_at_the_cell_centre() {
    let grid = DotGrid::new([1200.0, 1200.0], 120, 0.0);
    let seen = std::cell::Cell::new([0.0_f32; 2]);
    grid.shade([253.0, 251.0], 0.0, &DARK_PALETTE, |uv| {
        seen.set(uv);
        0.0
    });
    let [u, v] = seen.get();
    // pixel 253 lies in cell 25, whose centre is at 25.5 / 120
    assert!((u - 25.5 / 120.0).abs() < 1e-5);
    assert!((v - 25.5 / 120.0).abs() < 1e-5);
}
