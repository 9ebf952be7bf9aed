use crate::utils::{fast_inverse_sqrt, fast_inverse_sqrt_f64, finite_or_zero, inverse_sqrt};

#[test]
fn test_fast_inverse_sqrt_f64_error_bound() {
    // Sweep several decades, including values typical of squared distances in the unit square.
    let mut x = 1e-8_f64;
    while x < 1e8 {
        let exact = 1.0 / x.sqrt();
        let approx = fast_inverse_sqrt_f64(x);
        let rel = ((approx - exact) / exact).abs();
        assert!(rel < 2e-3, "x = {}, relative error {} too large", x, rel);
        x *= 1.37;
    }
}

#[test]
fn test_fast_inverse_sqrt_f32_error_bound() {
    for i in 1..2000 {
        let x = i as f32 * 0.013;
        let exact = 1.0 / x.sqrt();
        let rel = ((fast_inverse_sqrt(x) - exact) / exact).abs();
        assert!(rel < 2e-3, "x = {}, relative error {} too large", x, rel);
    }
}

#[test]
fn test_fast_inverse_sqrt_is_not_exact() {
    // A single Newton step leaves a visible, but bounded, error.
    let approx = fast_inverse_sqrt_f64(2.0);
    assert_ne!(approx, 1.0 / 2.0_f64.sqrt());
}

#[test]
fn test_inverse_sqrt_matches_selected_variant() {
    #[cfg(feature = "fast-rsqrt")]
    assert_eq!(inverse_sqrt(0.25), fast_inverse_sqrt_f64(0.25));
    #[cfg(not(feature = "fast-rsqrt"))]
    assert_eq!(inverse_sqrt(0.25), 2.0);
}

#[test]
fn test_finite_or_zero() {
    assert_eq!(finite_or_zero(1.5), 1.5);
    assert_eq!(finite_or_zero(f64::NAN), 0.0);
    assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
    assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
}
