pub mod load_error;
pub mod quiz;
pub mod results;
pub mod welcome;
