mod worker_pool;
mod integration;

pub use worker_pool::*;
pub use integration::*;

#[cfg(test)]
mod worker_pool_tests;
