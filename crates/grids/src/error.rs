use thiserror::Error;

/// Rejected generator input.
///
/// Generators themselves never fail; parameters are checked once before a
/// grid is built so that no non-finite coordinate can reach the output.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParameterError {
    #[error("{name} must be at least 1, got {value}.")]
    NonPositiveCount { name: &'static str, value: u32 },
    #[error("{name} must be greater than zero, got {value}.")]
    NonPositiveDimension { name: &'static str, value: f64 },
    #[error("{name} is not a finite number.")]
    NotFinite { name: &'static str },
    #[error("Invalid canvas size {width}x{height}.")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("Ratio {ratio} must be greater than zero.")]
    DegenerateRatio { ratio: f64 },
    #[error("The grid would contain more than {limit} sub-paths.")]
    TooManySubPaths { limit: u64 },
}

pub(crate) fn check_count(name: &'static str, value: u32) -> Result<(), ParameterError> {
    if value == 0 {
        return Err(ParameterError::NonPositiveCount { name, value });
    }

    Ok(())
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { name });
    }

    Ok(())
}

pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<(), ParameterError> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(ParameterError::NonPositiveDimension { name, value });
    }

    Ok(())
}

#[test]
fn messages() {
    assert_eq!(
        check_count("num_lines", 0).unwrap_err().to_string(),
        "num_lines must be at least 1, got 0."
    );
    assert_eq!(
        check_dimension("span", -2.0),
        Err(ParameterError::NonPositiveDimension {
            name: "span",
            value: -2.0
        })
    );
    assert_eq!(
        check_dimension("span", f64::NAN),
        Err(ParameterError::NotFinite { name: "span" })
    );
    assert!(check_finite("angle", -45.0).is_ok());
}
