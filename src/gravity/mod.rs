mod gravity_kernel;
#[cfg(target_arch = "x86_64")]
mod gravity_kernel_simd;

pub use gravity_kernel::*;
#[cfg(target_arch = "x86_64")]
pub use gravity_kernel_simd::*;
