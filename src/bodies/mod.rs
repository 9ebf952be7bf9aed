mod body;
mod distributions;

pub use body::*;
pub use distributions::*;
