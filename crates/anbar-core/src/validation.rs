//! # Validation Module
//!
//! Input validation for the product editor.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Editor Validation                              │
//! │                                                                     │
//! │  Text fields (name, category)                                       │
//! │  ├── Trimmed emptiness check → ValidationError::Required            │
//! │  └── Length caps             → ValidationError::TooLong             │
//! │                                                                     │
//! │  Count fields (quantity, threshold)                                 │
//! │  └── NEVER fail: coerce_count() turns any text into a               │
//! │      non-negative integer (non-numeric → 0)                         │
//! │                                                                     │
//! │  All-or-nothing: a failed check means no partial save.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length of a category name.
pub const MAX_CATEGORY_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use anbar_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Milk 1L").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a resolved category name.
///
/// The editor resolves the category first (selected option, or trimmed
/// free-text entry for a new category); this checks the resolved value.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Count Coercion
// =============================================================================

/// Coerces textual count input (quantity, low-stock threshold) to a
/// non-negative integer.
///
/// ## The Quirk (kept on purpose)
/// Count fields never fail validation. Input is parsed like the
/// historical form did: an optional sign followed by leading decimal
/// digits, anything else → 0. Negative results clamp to 0 so the
/// `quantity ≥ 0` invariant holds.
///
/// ## Example
/// ```rust
/// use anbar_core::validation::coerce_count;
///
/// assert_eq!(coerce_count("12"), 12);
/// assert_eq!(coerce_count("12abc"), 12);
/// assert_eq!(coerce_count("abc"), 0);
/// assert_eq!(coerce_count(""), 0);
/// assert_eq!(coerce_count("-5"), 0);
/// ```
pub fn coerce_count(raw: &str) -> i64 {
    let raw = raw.trim();

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if leading.is_empty() {
        return 0;
    }

    // Saturate rather than overflow on absurdly long digit runs.
    let value = leading.parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        0
    } else {
        value
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Milk 1L").is_ok());
        assert!(validate_product_name("شیر").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Dairy").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category("  ").is_err());
        assert!(validate_category(&"C".repeat(200)).is_err());
    }

    #[test]
    fn test_coerce_count_plain_numbers() {
        assert_eq!(coerce_count("0"), 0);
        assert_eq!(coerce_count("42"), 42);
        assert_eq!(coerce_count("  7  "), 7);
        assert_eq!(coerce_count("+3"), 3);
    }

    #[test]
    fn test_coerce_count_non_numeric_defaults_to_zero() {
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count("-"), 0);
        assert_eq!(coerce_count("3.9e2"), 3); // leading digits only
    }

    #[test]
    fn test_coerce_count_leading_digits_win() {
        assert_eq!(coerce_count("12abc"), 12);
        assert_eq!(coerce_count("12 boxes"), 12);
    }

    #[test]
    fn test_coerce_count_negative_clamps_to_zero() {
        assert_eq!(coerce_count("-5"), 0);
        assert_eq!(coerce_count("-0"), 0);
    }

    #[test]
    fn test_coerce_count_huge_input_saturates() {
        assert_eq!(coerce_count("99999999999999999999999"), i64::MAX);
    }
}
