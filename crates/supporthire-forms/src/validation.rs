//! Field validators.
//!
//! Every rule is pure and total: it never panics and returns the same
//! outcome for the same input. Text rules trim their input before checking
//! it, so they can run on raw (blur) and trimmed (submit) values alike.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::fields::Choice;

/// Outcome of a validation rule: `Err` carries the message to display.
pub type ValidationOutcome = Result<(), String>;

/// Message for an empty person name.
pub const NAME_REQUIRED: &str = "Name is required";
/// Message for a person name shorter than two characters.
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
/// Message for a person name with disallowed characters.
pub const NAME_INVALID: &str = "Name can only contain letters, spaces, hyphens, and apostrophes";
/// Message for an empty company name.
pub const COMPANY_REQUIRED: &str = "Company name is required";
/// Message for a company name shorter than two characters.
pub const COMPANY_TOO_SHORT: &str = "Company name must be at least 2 characters";
/// Message for a company name with disallowed characters.
pub const COMPANY_INVALID: &str =
    "Company name can only contain letters, numbers, spaces, and - . , & ' ( )";
/// Message for any malformed phone number.
pub const PHONE_INVALID: &str =
    "Please enter a valid 10-digit phone number, optionally prefixed with +91";
/// Message for a missing job type.
pub const SELECT_JOB_TYPE: &str = "Please select a job type";
/// Message for a missing shift preference.
pub const SELECT_SHIFT: &str = "Please select a shift preference";
/// Message for a missing monthly hiring volume.
pub const SELECT_MONTHLY_VOLUME: &str = "Please select monthly hiring volume";
/// Message for a missing willingness-to-pay answer.
pub const SELECT_AN_OPTION: &str = "Please select an option";
/// Message for an empty hiring role selection.
pub const SELECT_HIRING_ROLE: &str = "Please select at least one hiring role";

const PERSON_NAME_PATTERN: &str = r"^[A-Za-z\s'-]+$";
const COMPANY_NAME_PATTERN: &str = r"^[A-Za-z0-9\s\-.,&'()]+$";
const MIN_NAME_LENGTH: usize = 2;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> ValidationOutcome;
}

/// Validator that requires a non-blank value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> ValidationOutcome {
        if value.trim().is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator with a custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> ValidationOutcome {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Validator using a regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> ValidationOutcome {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Runs validators in order on the trimmed value and stops at the first
/// failure.
#[derive(Default)]
pub struct ValidatorChain {
    validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("len", &self.validators.len())
            .finish()
    }
}

impl ValidatorChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validator.
    #[must_use]
    pub fn then(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }
}

impl Validator for ValidatorChain {
    fn validate(&self, value: &str) -> ValidationOutcome {
        let trimmed = value.trim();
        self.validators
            .iter()
            .try_for_each(|validator| validator.validate(trimmed))
    }
}

/// Validator for Indian mobile numbers.
///
/// Spaces, hyphens and parentheses are ignored; what remains must be ten
/// digits, optionally preceded by `+91`.
#[derive(Debug, Clone)]
pub struct PhoneNumberValidator {
    local: Regex,
    international: Regex,
    message: String,
}

impl PhoneNumberValidator {
    /// Creates a new PhoneNumberValidator with the default message.
    pub fn new() -> Self {
        Self {
            local: Regex::new(r"^[0-9]{10}$").unwrap(),
            international: Regex::new(r"^\+91[0-9]{10}$").unwrap(),
            message: PHONE_INVALID.to_string(),
        }
    }

    /// Removes the separators users commonly type into phone numbers.
    pub fn strip_separators(value: &str) -> String {
        value
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect()
    }
}

impl Default for PhoneNumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for PhoneNumberValidator {
    fn validate(&self, value: &str) -> ValidationOutcome {
        let digits = Self::strip_separators(value);
        if self.local.is_match(&digits) || self.international.is_match(&digits) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

static PERSON_NAME: LazyLock<ValidatorChain> = LazyLock::new(|| {
    ValidatorChain::new()
        .then(RequiredValidator::with_message(NAME_REQUIRED))
        .then(MinLengthValidator::with_message(MIN_NAME_LENGTH, NAME_TOO_SHORT))
        .then(RegexValidator::new(PERSON_NAME_PATTERN, NAME_INVALID).unwrap())
});

static COMPANY_NAME: LazyLock<ValidatorChain> = LazyLock::new(|| {
    ValidatorChain::new()
        .then(RequiredValidator::with_message(COMPANY_REQUIRED))
        .then(MinLengthValidator::with_message(
            MIN_NAME_LENGTH,
            COMPANY_TOO_SHORT,
        ))
        .then(RegexValidator::new(COMPANY_NAME_PATTERN, COMPANY_INVALID).unwrap())
});

static PHONE_NUMBER: LazyLock<PhoneNumberValidator> = LazyLock::new(PhoneNumberValidator::new);

/// Validates a person's name. Also used for the city field.
pub fn validate_person_name(value: &str) -> ValidationOutcome {
    PERSON_NAME.validate(value)
}

/// Validates a company name.
pub fn validate_company_name(value: &str) -> ValidationOutcome {
    COMPANY_NAME.validate(value)
}

/// Validates a phone number.
pub fn validate_phone_number(value: &str) -> ValidationOutcome {
    PHONE_NUMBER.validate(value)
}

/// Validates that a selector has a value.
pub fn validate_required_selection(value: &str, message: &str) -> ValidationOutcome {
    if value.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validates a typed selection. `None` means nothing was selected.
pub fn validate_selection<C: Choice>(value: Option<C>, message: &str) -> ValidationOutcome {
    validate_required_selection(value.map_or("", Choice::value), message)
}

/// Validates that at least one option of a multi-select is chosen.
pub fn validate_non_empty_set<T>(values: &BTreeSet<T>) -> ValidationOutcome {
    if values.is_empty() {
        Err(SELECT_HIRING_ROLE.to_string())
    } else {
        Ok(())
    }
}
