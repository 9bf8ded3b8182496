pub mod estimates;
pub mod results;
