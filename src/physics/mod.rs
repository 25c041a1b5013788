pub mod curves;
pub mod units;

pub use curves::sigmoid;
