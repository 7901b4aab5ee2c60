//! # Validation Module
//!
//! Input validation utilities for Printworks.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Order form (HTML / CLI)                                      │
//! │  └── Everything arrives as a string                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Counts: present, numeric, whole, positive                         │
//! │  └── Customer details: present, bounded, email shaped                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                               │
//! │  └── Only ever sees typed, positive counts                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use printworks_core::validation::{parse_positive_int, validate_email};
//!
//! assert_eq!(parse_positive_int("page_amount", " 120 ").unwrap(), 120);
//! assert!(parse_positive_int("book_quantity", "abc").is_err());
//! assert!(validate_email("reader@example.com").is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::CustomerDetails;
use crate::{MAX_EMAIL_LEN, MAX_TEXT_FIELD_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Checks that a count is a positive integer that fits in `u32`.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `u32::MAX`
pub fn validate_positive(field: &str, value: i64) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field: field.to_string(),
        min: 1,
        max: i64::from(u32::MAX),
    })
}

/// Parses a raw form value as a positive integer count.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order form: page_amount = "???"                                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_positive_int("page_amount", raw) ← THIS FUNCTION                │
/// │       │                                                                 │
/// │       ├── ""      → Required                                           │
/// │       ├── "abc"   → InvalidFormat: must be a number                    │
/// │       ├── "12.5"  → InvalidFormat: must be a whole number              │
/// │       ├── "0"     → MustBePositive                                     │
/// │       ├── "-5"    → MustBePositive                                     │
/// │       └── "120"   → Ok(120)                                            │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_positive_int(field: &str, raw: &str) -> ValidationResult<u32> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    match raw.parse::<i64>() {
        Ok(value) => validate_positive(field, value),
        // Digits only but beyond i64
        Err(_) if is_integer_literal(raw) && raw.starts_with('-') => {
            Err(ValidationError::MustBePositive {
                field: field.to_string(),
            })
        }
        Err(_) if is_integer_literal(raw) => Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        }),
        Err(_) if raw.parse::<f64>().is_ok_and(f64::is_finite) => {
            Err(ValidationError::InvalidFormat {
                field: field.to_string(),
                reason: "must be a whole number".to_string(),
            })
        }
        Err(_) => Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a number".to_string(),
        }),
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `max` characters
pub fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates an email address and returns it trimmed.
///
/// Shape check only: one `@`, non-empty local part, dotted domain, no
/// whitespace. Deliverability is the mailer's problem.
///
/// ## Example
/// ```rust
/// use printworks_core::validation::validate_email;
///
/// assert!(validate_email("anna@example.com").is_ok());
/// assert!(validate_email("anna@localhost").is_err());
/// assert!(validate_email("anna.example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required_text("email", email, MAX_EMAIL_LEN)?;

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must contain exactly one @ after a name"));
    }

    let dotted = domain
        .split('.')
        .all(|label| !label.is_empty())
        && domain.contains('.');
    if !dotted {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(email)
}

/// Validates every customer detail, returning a trimmed copy.
pub fn validate_customer_details(details: &CustomerDetails) -> ValidationResult<CustomerDetails> {
    Ok(CustomerDetails {
        name_surname: validate_required_text(
            "name_surname",
            &details.name_surname,
            MAX_TEXT_FIELD_LEN,
        )?,
        email: validate_email(&details.email)?,
        street_address: validate_required_text(
            "street_address",
            &details.street_address,
            MAX_TEXT_FIELD_LEN,
        )?,
        city: validate_required_text("city", &details.city, MAX_TEXT_FIELD_LEN)?,
        country: validate_required_text("country", &details.country, MAX_TEXT_FIELD_LEN)?,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
