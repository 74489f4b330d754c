use quickcheck_macros::quickcheck;
use strategist_ui_wasm::domain::easing::{decay_factor, ease_in_out_circ};

fn unit(raw: u16) -> f32 {
    raw as f32 / u16::MAX as f32
}

#[test]
fn fixed_points() {
    assert_eq!(ease_in_out_circ(0.0), 0.0);
    assert_eq!(ease_in_out_circ(1.0), 1.0);
    assert!((ease_in_out_circ(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn flat_at_the_ends_and_steep_in_the_middle() {
    let h = 0.01;
    let start = ease_in_out_circ(h) - ease_in_out_circ(0.0);
    let middle = ease_in_out_circ(0.5 + h / 2.0) - ease_in_out_circ(0.5 - h / 2.0);
    let end = ease_in_out_circ(1.0) - ease_in_out_circ(1.0 - h);
    assert!(middle > start * 10.0);
    assert!(middle > end * 10.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(ease_in_out_circ(-3.0), 0.0);
    assert_eq!(ease_in_out_circ(7.0), 1.0);
}

#[quickcheck]
fn non_decreasing_on_unit_interval(a: u16, b: u16) -> bool {
    let (lo, hi) = if a <= b { (unit(a), unit(b)) } else { (unit(b), unit(a)) };
    ease_in_out_circ(lo) <= ease_in_out_circ(hi) + 1e-6
}

#[quickcheck]
fn symmetric_about_midpoint(a: u16) -> bool {
    let x = unit(a);
    (ease_in_out_circ(x) + ease_in_out_circ(1.0 - x) - 1.0).abs() < 1e-4
}

#[quickcheck]
fn decay_never_grows_with_age(age: u16, extra: u8) -> bool {
    let age = age as u64 % 700;
    decay_factor(age + extra as u64, 600) <= decay_factor(age, 600)
}
