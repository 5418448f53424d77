pub mod arithmetic_mean;
pub mod load_result_sequences;
pub mod ratio_to_percentage;

pub use arithmetic_mean::arithmetic_mean;
pub use load_result_sequences::load_result_sequences;
pub use ratio_to_percentage::ratio_to_percentage;
