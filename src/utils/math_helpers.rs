/// Bit-level initial guess for the `f32` inverse square root.
const RSQRT_MAGIC_F32: u32 = 0x5f37_59df;
/// Bit-level initial guess for the `f64` inverse square root.
pub const RSQRT_MAGIC_F64: u64 = 0x5fe6_eb50_c7b5_37a9;

/// Approximate `1 / sqrt(x)` for `f32`.
///
/// One Newton-Raphson step after the integer initial guess.
/// Max relative error ~0.175% for positive, normal inputs.
#[inline]
pub fn fast_inverse_sqrt(x: f32) -> f32 {
    let guess = f32::from_bits(RSQRT_MAGIC_F32.wrapping_sub(x.to_bits() >> 1));
    guess * (1.5 - 0.5 * x * guess * guess)
}

/// Approximate `1 / sqrt(x)` for `f64`.
///
/// Same scheme as [`fast_inverse_sqrt`] with the 64-bit magic constant.
/// Max relative error ~0.175% for positive, normal inputs.
#[inline]
pub fn fast_inverse_sqrt_f64(x: f64) -> f64 {
    let guess = f64::from_bits(RSQRT_MAGIC_F64.wrapping_sub(x.to_bits() >> 1));
    guess * (1.5 - 0.5 * x * guess * guess)
}

/// Inverse square root used by the gravity kernels.
///
/// Resolves to [`fast_inverse_sqrt_f64`] with the `fast-rsqrt` feature, and to
/// the exact `1 / sqrt(x)` otherwise.
#[inline]
pub fn inverse_sqrt(x: f64) -> f64 {
    #[cfg(feature = "fast-rsqrt")]
    {
        fast_inverse_sqrt_f64(x)
    }
    #[cfg(not(feature = "fast-rsqrt"))]
    {
        1.0 / x.sqrt()
    }
}

/// Replaces NaN and infinities with zero.
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
