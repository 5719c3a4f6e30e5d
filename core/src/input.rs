//! Form input constraints, checked before anything reaches the stores.

use crate::error::{Error, Result};

/// Hours entries move in half-hour steps.
pub const HOURS_STEP: f64 = 0.5;

/// Returns the trimmed hours string if it is a number on the 0.5 step.
/// Zero and negative values pass; only shape is checked here.
pub fn validate_hours(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_hours(input, "hours are required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| Error::invalid_hours(input, "not a number"))?;
    if !value.is_finite() {
        return Err(Error::invalid_hours(input, "not a number"));
    }
    if (value / HOURS_STEP).fract() != 0.0 {
        return Err(Error::invalid_hours(input, "must be a multiple of 0.5"));
    }
    Ok(trimmed.to_string())
}

pub fn normalize_requirement(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyRequirement);
    }
    Ok(trimmed.to_string())
}
