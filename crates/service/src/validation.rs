//! Input checks applied before any record store call.

use crate::errors::ServiceError;

/// Fail with `OutOfRange(field)` unless `value` is strictly positive.
/// NaN never compares greater than zero and is rejected too.
pub fn check_positive_number<N: Into<f64>>(value: N, field: &str) -> Result<(), ServiceError> {
    if value.into() > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::out_of_range(field))
    }
}

/// Identifier check shared by every lookup.
pub fn check_id(id: i32) -> Result<(), ServiceError> {
    check_positive_number(id, "id")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_values_pass() {
        assert!(check_positive_number(1, "id").is_ok());
        assert!(check_positive_number(0.01, "price").is_ok());
        assert!(check_positive_number(f64::MAX, "weight").is_ok());
    }

    #[test]
    fn zero_and_negative_fail_with_field_name() {
        match check_positive_number(0, "category_id") {
            Err(ServiceError::OutOfRange(field)) => assert_eq!(field, "category_id"),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(check_positive_number(-1.5, "price"), Err(ServiceError::OutOfRange(_))));
        assert!(matches!(check_id(i32::MIN), Err(ServiceError::OutOfRange(f)) if f == "id"));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(check_positive_number(f64::NAN, "weight").is_err());
    }
}
