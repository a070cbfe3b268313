//! Input validation for account fields
//!
//! Create payloads must carry every required field; update payloads may carry
//! any subset. Values are free-form text: the only rule is that a provided
//! value is not blank.

use super::models::{Account, AccountUpdate, NewAccount};

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for account payloads
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Field {0} cannot be blank")]
    Blank(&'static str),
}

// ============================================================================
// Field checks
// ============================================================================

fn check(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(value)
}

/// Validate a required field
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    check(field, value)
}

/// Validate an optional field (absent means "no change")
pub fn optional(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| check(field, v)).transpose()
}

// ============================================================================
// Payload checks
// ============================================================================

/// Validate a create payload and open the account
///
/// Fields are checked in order name, currency, country; the first failure wins.
pub fn validate_new_account(
    name: Option<String>,
    currency: Option<String>,
    country: Option<String>,
) -> Result<NewAccount, ValidationError> {
    let name = required("name", name)?;
    let currency = required("currency", currency)?;
    let country = required("country", country)?;
    Ok(Account::new(name, currency, country))
}

/// Validate an update payload
pub fn validate_update(
    name: Option<String>,
    currency: Option<String>,
    country: Option<String>,
) -> Result<AccountUpdate, ValidationError> {
    Ok(AccountUpdate {
        name: optional("name", name)?,
        currency: optional("currency", currency)?,
        country: optional("country", country)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_new_account_valid() {
        let account = validate_new_account(s("Jane Doe"), s("€"), s("France")).unwrap();
        assert_eq!(account.name, "Jane Doe");
        assert_eq!(account.currency, "€");
        assert_eq!(account.country, "France");
        assert_eq!(account.status, "Active");
    }

    #[test]
    fn test_new_account_missing_field() {
        let err = validate_new_account(s("Jane Doe"), None, s("France")).unwrap_err();
        assert_eq!(err, ValidationError::Missing("currency"));

        let err = validate_new_account(None, None, None).unwrap_err();
        assert_eq!(err, ValidationError::Missing("name"));
    }

    #[test]
    fn test_new_account_blank_field() {
        let err = validate_new_account(s("   "), s("$"), s("USA")).unwrap_err();
        assert_eq!(err, ValidationError::Blank("name"));
    }

    #[test]
    fn test_free_form_values_accepted() {
        let long_name = "A".repeat(200);
        let account = validate_new_account(
            Some(long_name.clone()),
            s("US Dollar"),
            s("United States of America"),
        )
        .unwrap();
        assert_eq!(account.name, long_name);
        assert_eq!(account.currency, "US Dollar");
        assert_eq!(account.country, "United States of America");
    }

    #[test]
    fn test_update_subset() {
        let update = validate_update(s("John Smith"), None, s("Canada")).unwrap();
        assert_eq!(update.name.as_deref(), Some("John Smith"));
        assert_eq!(update.currency, None);
        assert_eq!(update.country.as_deref(), Some("Canada"));
    }

    #[test]
    fn test_update_empty_is_allowed() {
        let update = validate_update(None, None, None).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_rejects_blank_value() {
        let err = validate_update(None, None, s("")).unwrap_err();
        assert_eq!(err, ValidationError::Blank("country"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::Missing("name").to_string(),
            "Missing required field: name"
        );
        assert_eq!(
            ValidationError::Blank("country").to_string(),
            "Field country cannot be blank"
        );
    }
}
