pub mod aggregate;
pub mod duration;

pub use aggregate::{format_encoded, sum_and_format};
pub use duration::{compute, encoded_hours};
