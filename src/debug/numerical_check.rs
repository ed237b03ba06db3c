use std::fmt;

use ndarray::ArrayViewD;

/// Types of numerical issues
#[derive(Debug, Clone, PartialEq)]
pub enum NumericalIssue {
    NaN { count: usize },
    Infinity { count: usize },
}

impl fmt::Display for NumericalIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericalIssue::NaN { count } => write!(f, "{} NaN values", count),
            NumericalIssue::Infinity { count } => write!(f, "{} infinite values", count),
        }
    }
}

/// Check an activation output for numerical issues
pub fn check_output(name: &str, output: ArrayViewD<f32>) -> Vec<NumericalIssue> {
    let mut issues = Vec::new();
    let mut nan_count = 0;
    let mut inf_count = 0;

    for &value in output.iter() {
        if value.is_nan() {
            nan_count += 1;
        } else if value.is_infinite() {
            inf_count += 1;
        }
    }

    if nan_count > 0 {
        issues.push(NumericalIssue::NaN { count: nan_count });
        log::warn!("Activation {}: Found {} NaN values in output", name, nan_count);
    }
    if inf_count > 0 {
        issues.push(NumericalIssue::Infinity { count: inf_count });
        log::warn!("Activation {}: Found {} infinite values in output", name, inf_count);
    }

    issues
}

/// Fraction of outputs whose magnitude exceeds `threshold`.
///
/// Useful for spotting saturated logistic or tanh units.
pub fn saturation_rate(output: ArrayViewD<f32>, threshold: f32) -> f32 {
    if output.is_empty() {
        return 0.0;
    }
    let saturated = output.iter().filter(|v| v.abs() > threshold).count();
    saturated as f32 / output.len() as f32
}
