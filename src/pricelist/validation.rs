//! # Validation
//!
//! Range checks for the numeric fields of a product. The model calls these on
//! construction and on every setter, the loader calls them per line, and the
//! bulk commands call them on their arguments before touching any record.

use crate::error::ConstraintViolation;

pub type ValidationResult<T> = std::result::Result<T, ConstraintViolation>;

pub const MAX_PERCENT: f64 = 100.0;

/// Base prices are finite and non-negative.
pub fn validate_base_price(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ConstraintViolation::NotFinite {
            field: "base price",
        });
    }
    if value < 0.0 {
        return Err(ConstraintViolation::NegativePrice(value));
    }
    Ok(())
}

/// Discounts (and the percent of a bulk discount) live in `[0, 100]`.
pub fn validate_percent(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ConstraintViolation::NotFinite { field: "discount" });
    }
    if !(0.0..=MAX_PERCENT).contains(&value) {
        return Err(ConstraintViolation::DiscountOutOfRange(value));
    }
    Ok(())
}

pub fn validate_threshold(value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ConstraintViolation::NotFinite { field: "threshold" });
    }
    Ok(())
}

/// Names and types are stored between `;` delimiters on a single line.
pub fn validate_text(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.contains(&[';', '\n', '\r'][..]) {
        return Err(ConstraintViolation::ReservedCharacter { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_price_accepts_zero_and_rejects_negative() {
        assert!(validate_base_price(0.0).is_ok());
        assert!(validate_base_price(12.5).is_ok());
        assert_eq!(
            validate_base_price(-0.01),
            Err(ConstraintViolation::NegativePrice(-0.01))
        );
    }

    #[test]
    fn percent_bounds_are_inclusive() {
        assert!(validate_percent(0.0).is_ok());
        assert!(validate_percent(100.0).is_ok());
        assert!(validate_percent(100.5).is_err());
        assert!(validate_percent(-1.0).is_err());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(validate_base_price(f64::NAN).is_err());
        assert!(validate_base_price(f64::INFINITY).is_err());
        assert!(validate_percent(f64::NAN).is_err());
        assert!(validate_threshold(f64::NEG_INFINITY).is_err());
        assert!(validate_threshold(-5.0).is_ok());
    }

    #[test]
    fn text_must_fit_on_one_field() {
        assert!(validate_text("name", "Молоток 500 g").is_ok());
        assert!(validate_text("name", "").is_ok());
        assert_eq!(
            validate_text("type", "a;b"),
            Err(ConstraintViolation::ReservedCharacter { field: "type" })
        );
        assert!(validate_text("name", "two\nlines").is_err());
    }
}
