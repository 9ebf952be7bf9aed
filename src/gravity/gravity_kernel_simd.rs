use std::arch::x86_64::*;
use crate::bodies::PointMass;
use crate::gravity::LeafBatch;
use crate::utils::LEAF_CAPACITY;
#[cfg(feature = "fast-rsqrt")]
use crate::utils::RSQRT_MAGIC_F64;

/// AVX2 version of [`batched_force`](crate::gravity::batched_force).
///
/// Processes the leaf lanes four at a time. Per-lane arithmetic follows the
/// portable kernel operation by operation, so the two differ only in the order
/// the lane forces are summed.
///
/// # Safety
///
/// The caller must ensure the CPU supports AVX2.
#[target_feature(enable = "avx2")]
pub unsafe fn batched_force_avx2(
    receiver: &PointMass,
    batch: &LeafBatch,
    gravity: f64,
    min_separation: f64,
) -> (f64, f64) {
    let p_x = _mm256_set1_pd(receiver.x);
    let p_y = _mm256_set1_pd(receiver.y);
    let g_m = _mm256_set1_pd(gravity * receiver.mass);
    let separation = _mm256_set1_pd(min_separation);
    let sign_bit = _mm256_set1_pd(-0.0);
    let zero = _mm256_setzero_pd();

    let mut acc_x = zero;
    let mut acc_y = zero;
    let mut lane = 0;
    while lane < LEAF_CAPACITY {
        let s_x = _mm256_loadu_pd(batch.xs.as_ptr().add(lane));
        let s_y = _mm256_loadu_pd(batch.ys.as_ptr().add(lane));
        let s_m = _mm256_loadu_pd(batch.masses.as_ptr().add(lane));

        let dx = _mm256_sub_pd(s_x, p_x);
        let dy = _mm256_sub_pd(s_y, p_y);

        // Minimum-separation guard on both axes.
        let near_x = _mm256_cmp_pd(_mm256_andnot_pd(sign_bit, dx), separation, _CMP_LT_OQ);
        let near_y = _mm256_cmp_pd(_mm256_andnot_pd(sign_bit, dy), separation, _CMP_LT_OQ);
        let near = _mm256_and_pd(near_x, near_y);

        let dist_sq = _mm256_add_pd(_mm256_mul_pd(dx, dx), _mm256_mul_pd(dy, dy));
        let inv_dist = inverse_sqrt_pd(dist_sq);
        let magnitude = _mm256_mul_pd(
            _mm256_mul_pd(_mm256_mul_pd(_mm256_mul_pd(g_m, s_m), inv_dist), inv_dist),
            inv_dist,
        );

        let f_x = _mm256_andnot_pd(near, finite_or_zero_pd(_mm256_mul_pd(magnitude, dx), zero));
        let f_y = _mm256_andnot_pd(near, finite_or_zero_pd(_mm256_mul_pd(magnitude, dy), zero));
        acc_x = _mm256_add_pd(acc_x, f_x);
        acc_y = _mm256_add_pd(acc_y, f_y);

        lane += 4;
    }

    let mut sum_x = [0.0; 4];
    let mut sum_y = [0.0; 4];
    _mm256_storeu_pd(sum_x.as_mut_ptr(), acc_x);
    _mm256_storeu_pd(sum_y.as_mut_ptr(), acc_y);
    (sum_x.iter().sum(), sum_y.iter().sum())
}

#[inline]
#[target_feature(enable = "avx2")]
unsafe fn inverse_sqrt_pd(x: __m256d) -> __m256d {
    #[cfg(feature = "fast-rsqrt")]
    {
        let bits = _mm256_srli_epi64(_mm256_castpd_si256(x), 1);
        let guess = _mm256_castsi256_pd(_mm256_sub_epi64(
            _mm256_set1_epi64x(RSQRT_MAGIC_F64 as i64),
            bits,
        ));
        let half_x = _mm256_mul_pd(_mm256_set1_pd(0.5), x);
        let correction = _mm256_sub_pd(
            _mm256_set1_pd(1.5),
            _mm256_mul_pd(_mm256_mul_pd(half_x, guess), guess),
        );
        _mm256_mul_pd(guess, correction)
    }
    #[cfg(not(feature = "fast-rsqrt"))]
    {
        _mm256_div_pd(_mm256_set1_pd(1.0), _mm256_sqrt_pd(x))
    }
}

// v - v is zero exactly when v is finite.
#[inline]
#[target_feature(enable = "avx2")]
unsafe fn finite_or_zero_pd(v: __m256d, zero: __m256d) -> __m256d {
    let finite = _mm256_cmp_pd(_mm256_sub_pd(v, v), zero, _CMP_EQ_OQ);
    _mm256_and_pd(v, finite)
}
