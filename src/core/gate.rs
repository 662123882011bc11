use crate::core::{FootprintInput, FormFields};
use crate::utils::error::{FootprintError, Result};

/// Strict parse of one field: surrounding whitespace is ignored, anything
/// else that is not a finite number is rejected.
pub fn parse_field(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Lenient parse used for display data: unparseable text counts as zero.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_field(raw).unwrap_or(0.0)
}

pub fn validate(energy: &str, fuel: &str, methane: &str) -> Result<FootprintInput> {
    match (parse_field(energy), parse_field(fuel), parse_field(methane)) {
        (Some(energy), Some(fuel), Some(methane)) => {
            Ok(FootprintInput::new(energy, fuel, methane))
        }
        _ => {
            tracing::debug!(
                "Rejected input: energy={:?}, fuel={:?}, methane={:?}",
                energy,
                fuel,
                methane
            );
            Err(FootprintError::invalid_input())
        }
    }
}

pub fn validate_fields(fields: &FormFields) -> Result<FootprintInput> {
    validate(
        &fields.energy_consumption,
        &fields.fuel_usage,
        &fields.methane_emissions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::INVALID_INPUT_MESSAGE;

    fn assert_invalid(result: Result<FootprintInput>) {
        match result {
            Err(FootprintError::InvalidInput { message }) => {
                assert_eq!(message, INVALID_INPUT_MESSAGE)
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert_invalid(validate("", "1", "2"));
        assert_invalid(validate("1", "", "2"));
        assert_invalid(validate("1", "2", ""));
        assert_invalid(validate("   ", "1", "2"));
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        assert_invalid(validate("abc", "1", "2"));
        assert_invalid(validate("1", "two", "2"));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        assert_invalid(validate("NaN", "1", "2"));
        assert_invalid(validate("inf", "1", "2"));
        assert_invalid(validate("1", "-infinity", "2"));
        assert_invalid(validate("1e400", "1", "2"));
    }

    #[test]
    fn test_accepts_numbers() {
        let input = validate("10", " 5.5 ", "-1e2").unwrap();
        assert_eq!(input, FootprintInput::new(10.0, 5.5, -100.0));
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
    }

    #[test]
    fn test_numeric_prefix_is_not_accepted() {
        assert_eq!(parse_field("12abc"), None);
        assert_eq!(parse_field("3.5 kg"), None);
        assert_eq!(parse_or_zero("12abc"), 0.0);
        assert_invalid(validate("12abc", "1", "2"));
    }
}
