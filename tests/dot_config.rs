use strategist_ui_wasm::application::BackdropController;
use strategist_ui_wasm::domain::config::{DotGridConfig, TrailConfig};
use strategist_ui_wasm::domain::dot_grid::DotGrid;
use strategist_ui_wasm::domain::errors::AppError;
use strategist_ui_wasm::domain::theme::Theme;
use strategist_ui_wasm::domain::trail::TrailField;

#[test]
fn empty_object_yields_defaults() {
    let config = DotGridConfig::from_json("{}");
    assert_eq!(config, Ok(DotGridConfig::default()));
}

#[test]
fn defaults_describe_the_stock_backdrop() {
    let config = DotGridConfig::default();
    insta::assert_snapshot!(
        format!(
            "grid={} rotation={} trail={}px r={} age={} interpolate={}",
            config.grid_size,
            config.rotation,
            config.trail.size,
            config.trail.radius,
            config.trail.max_age,
            config.trail.interpolate
        ),
        @"grid=120 rotation=0 trail=512px r=0.2 age=600 interpolate=3"
    );
}

#[test]
fn partial_override_keeps_the_rest() {
    let config = DotGridConfig::from_json(r#"{ "grid_size": 80, "trail": { "max_age": 240 } }"#);
    let expected = DotGridConfig {
        grid_size: 80,
        trail: TrailConfig { max_age: 240, ..TrailConfig::default() },
        ..DotGridConfig::default()
    };
    assert_eq!(config, Ok(expected));
}

#[test]
fn serialized_defaults_parse_back() {
    let json = serde_json::to_string(&DotGridConfig::default()).unwrap();
    assert_eq!(DotGridConfig::from_json(&json), Ok(DotGridConfig::default()));
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(DotGridConfig::from_json("{ grid_size: }"), Err(AppError::ConfigError(_))));
    assert!(matches!(
        DotGridConfig::from_json(r#"{ "grid_size": -4 }"#),
        Err(AppError::ConfigError(_))
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        r#"{ "grid_size": 0 }"#,
        r#"{ "trail": { "size": 0 } }"#,
        r#"{ "trail": { "radius": 0.0 } }"#,
        r#"{ "trail": { "radius": 1.5 } }"#,
        r#"{ "trail": { "max_age": 0 } }"#,
        r#"{ "trail": { "intensity": 2.0 } }"#,
        r#"{ "trail": { "min_force": -0.1 } }"#,
        r#"{ "trail": { "smoothing": 1.0 } }"#,
        r#"{ "trail": { "stamp_budget": 0 } }"#,
    ];
    for json in cases {
        let result = DotGridConfig::from_json(json);
        assert!(matches!(result, Err(AppError::ConfigError(_))), "{} -> {:?}", json, result);
    }
}

#[test]
fn error_message_names_the_field() {
    let message = match DotGridConfig::from_json(r#"{ "trail": { "radius": 3.0 } }"#) {
        Err(e) => e.to_string(),
        Ok(_) => String::new(),
    };
    insta::assert_snapshot!(message, @"Config Error: trail.radius must be in (0, 1], got 3");
}

#[test]
fn non_finite_rotation_is_rejected() {
    let config = DotGridConfig { rotation: f32::INFINITY, ..DotGridConfig::default() };
    assert!(config.validate().is_err());
    let config = DotGridConfig { rotation: std::f32::consts::FRAC_PI_4, ..DotGridConfig::default() };
    assert!(config.validate().is_ok());
}

#[test]
fn constructors_refuse_configs_that_do_not_validate() {
    let zero_trail = DotGridConfig { trail: TrailConfig { size: 0, ..TrailConfig::default() }, ..DotGridConfig::default() };
    let zero_grid = DotGridConfig { grid_size: 0, ..DotGridConfig::default() };
    for config in [zero_trail.clone(), zero_grid] {
        let result = BackdropController::new(config.clone(), Theme::Dark);
        assert!(matches!(result, Err(AppError::ConfigError(_))), "{:?}", config);
    }
    assert!(matches!(TrailField::new(zero_trail.trail), Err(AppError::ConfigError(_))));
}

#[test]
fn zero_cell_grid_does_not_underflow() {
    let grid = DotGrid::new([800.0, 600.0], 0, 0.0);
    assert_eq!(grid.cells_per_side(), 1);
    assert_eq!(grid.cell_at([799.0, 599.0]), (0, 0));
}
