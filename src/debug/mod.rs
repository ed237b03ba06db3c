pub mod numerical_check;

pub use numerical_check::{check_output, saturation_rate, NumericalIssue};
