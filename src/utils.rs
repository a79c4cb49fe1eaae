use crate::errors::SampleSizerError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    items.join(", ")
}

/// Round a value to a fixed number of decimals for display, keeping NaN and infinities as they are.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// Validation
pub fn validate_float_parameter(value: f64, min: f64, max: f64, parameter: &str) -> Result<(), SampleSizerError> {
    if value.is_nan() || value < min || max < value {
        let ex_msg = format!("real value within range {} and {}", min, max);
        Err(SampleSizerError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Open interval check, used for probabilities such as the significance threshold.
pub fn validate_open_unit_interval(value: f64, parameter: &str) -> Result<(), SampleSizerError> {
    if value.is_nan() || value <= 0.0 || value >= 1.0 {
        Err(SampleSizerError::InvalidParameter(
            parameter.to_string(),
            "real value strictly between 0 and 1".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_to_strings() {
        assert_eq!(items_to_strings(vec!["Greater", "Less"]), "Greater, Less");
        assert_eq!(items_to_strings(vec![]), "");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.0114053975, 5), 0.01141);
        assert_eq!(round_to(2.25, 5), 2.25);
        assert!(round_to(f64::NAN, 5).is_nan());
        assert_eq!(round_to(f64::INFINITY, 5), f64::INFINITY);
    }

    #[test]
    fn test_validate_float_parameter() {
        assert!(validate_float_parameter(10.0, 0.0, 100.0, "rate").is_ok());
        assert!(validate_float_parameter(0.0, 0.0, 100.0, "rate").is_ok());
        assert!(validate_float_parameter(100.0, 0.0, 100.0, "rate").is_ok());
        assert!(validate_float_parameter(100.1, 0.0, 100.0, "rate").is_err());
        assert!(validate_float_parameter(-0.1, 0.0, 100.0, "rate").is_err());
        assert!(validate_float_parameter(f64::NAN, 0.0, 100.0, "rate").is_err());
    }

    #[test]
    fn test_validate_open_unit_interval() {
        assert!(validate_open_unit_interval(0.1, "alpha").is_ok());
        assert!(validate_open_unit_interval(0.0, "alpha").is_err());
        assert!(validate_open_unit_interval(1.0, "alpha").is_err());
        match validate_open_unit_interval(1.5, "alpha") {
            Err(SampleSizerError::InvalidParameter(name, _, passed)) => {
                assert_eq!(name, "alpha");
                assert_eq!(passed, "1.5");
            }
            _ => panic!("expected InvalidParameter"),
        }
    }
}
