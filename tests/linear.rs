use approx::assert_abs_diff_eq;
use motion_profile::{Linear, Position};

const TOL: f32 = 1e-5;

#[test]
fn init_boundary() {
    let mut mp = Linear::<f32>::new();
    assert_abs_diff_eq!(mp.q(), 0.0, epsilon = TOL);
    assert_abs_diff_eq!(mp.q_at(-1.0), 0.0, epsilon = TOL);
    assert_abs_diff_eq!(mp.q_at(1.0), 0.0, epsilon = TOL);
}

#[test]
fn linear_profile() {
    let mut mp = Linear::<f32>::new();
    mp.extend(2.0, 1.0);
    assert_abs_diff_eq!(mp.q_at(0.0), 0.0, epsilon = TOL);

    // half-way in time is half-way in position
    assert_abs_diff_eq!(mp.q_at(0.5), 0.25, epsilon = TOL);
    assert_abs_diff_eq!(mp.q_at(1.0), 0.5, epsilon = TOL);

    // out of range evaluates to exactly the last in range value
    assert_eq!(mp.q_at(2.0), mp.q_at(3.0));
    assert_eq!(mp.q_at(-1.0), mp.q_at(0.0));
}

#[test]
fn boundary_exactness_f64() {
    let mut mp = Linear::<f64>::new();
    for &(t0, tf, q0, qf) in &[
        (0.0, 1.0, 0.0, 1.0),
        (-3.0, 7.5, 12.0, -4.0),
        (100.0, 100.25, 1.0, 1.5),
        (5.0, -5.0, 2.0, 8.0),
    ] {
        mp.set((t0, tf), (q0, qf));
        assert_abs_diff_eq!(mp.q_at(t0), q0, epsilon = 1e-9);
        assert_abs_diff_eq!(mp.q_at(tf), qf, epsilon = 1e-9);
    }
}

#[test]
fn reversed_segment_clamps_on_both_sides() {
    let mut mp = Linear::<f64>::new();
    mp.set((2.0, 0.0), (10.0, 0.0));
    assert_abs_diff_eq!(mp.q_at(1.0), 5.0, epsilon = 1e-12);
    assert_eq!(mp.q_at(-4.0), mp.q_at(0.0));
    assert_eq!(mp.q_at(9.0), mp.q_at(2.0));
    assert_abs_diff_eq!(mp.q_at(9.0), 10.0, epsilon = 1e-12);
}

#[test]
fn extend_is_continuous() {
    let mut mp = Linear::<f64>::new();
    mp.set((0.0, 4.0), (0.0, 8.0));
    let before = mp.q_at(1.5);

    mp.extend(3.0, -1.0);
    assert_eq!(mp.time(), (1.5, 3.0));
    assert_eq!(mp.q(), before);
    assert_abs_diff_eq!(mp.q_at(3.0), -1.0, epsilon = 1e-12);
}

#[test]
fn extend_from_beyond_the_segment_starts_at_the_clamped_value() {
    let mut mp = Linear::<f64>::new();
    mp.set((0.0, 1.0), (0.0, 1.0));
    mp.q_at(5.0);

    mp.extend(6.0, 3.0);
    assert_eq!(mp.pos(), (1.0, 3.0));
    assert_abs_diff_eq!(mp.q_at(5.5), 2.0, epsilon = 1e-12);
}

#[test]
fn degenerate_segment_steps_to_final_value() {
    let mut mp = Linear::<f32>::new();
    mp.set((1.0, 1.0), (-2.0, 7.0));
    assert_eq!(mp.q_at(0.0), 7.0);
    assert_eq!(mp.q_at(1.0), 7.0);
    assert_eq!(mp.q_at(2.0), 7.0);
}

#[test]
fn monomial_coefficients() {
    let mut mp = Linear::<f64>::new();
    mp.set((1.0, 3.0), (1.0, 5.0));
    // q(t) = -1 + 2t
    let c = mp.polynomial().monomial();
    assert_abs_diff_eq!(c[0], -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c[1], 2.0, epsilon = 1e-12);
}

#[test]
fn very_short_segment_keeps_exact_boundaries() {
    let mut mp = Linear::<f32>::new();
    mp.set((0.0, 1e-39), (0.0, 1.0));
    assert_eq!(mp.q_at(0.0), 0.0);
    assert_eq!(mp.q_at(1e-39), 1.0);
    assert_eq!(mp.q_at(-1.0), 0.0);
    assert_eq!(mp.q_at(1.0), 1.0);
}

#[test]
fn nan_cursor_reports_the_lower_bound() {
    let mut mp = Linear::<f64>::new();
    mp.set((0.0, 2.0), (1.0, 5.0));
    assert_eq!(mp.q_at(f64::NAN), 1.0);

    // reversed: the lower bound is the final time
    mp.set((2.0, 0.0), (1.0, 5.0));
    assert_eq!(mp.q_at(f64::NAN), 5.0);
}
