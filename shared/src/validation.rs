//! Validation utilities for the FarmHelp forms
//!
//! Account forms accumulate every failure; soil samples stop at the first.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::SoilValidationError;
use crate::models::{LoginForm, Region, RegistrationForm, SoilSample};

pub const NITROGEN_RANGE: (i32, i32) = (0, 140);
pub const PHOSPHORUS_RANGE: (i32, i32) = (0, 140);
pub const POTASSIUM_RANGE: (i32, i32) = (0, 140);
pub const TEMPERATURE_RANGE: (f64, f64) = (0.0, 50.0);
pub const HUMIDITY_RANGE: (f64, f64) = (0.0, 100.0);
pub const PH_RANGE: (f64, f64) = (0.0, 14.0);
pub const RAINFALL_RANGE: (f64, f64) = (0.0, 300.0);

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 2;

// ============================================================================
// Account Field Validations
// ============================================================================

/// Validate email format (`local@domain.tld`, no whitespace, single `@`)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    const MESSAGE: &str = "Please enter a valid email address";

    if email.chars().any(char::is_whitespace) {
        return Err(MESSAGE);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(MESSAGE);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(MESSAGE);
    }
    // Needs a dot with at least one character on each side
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(MESSAGE);
    }
    Ok(())
}

/// Length as a browser reports it, in UTF-16 code units
fn form_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if form_length(password) < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

/// Validate display name, ignoring surrounding whitespace
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if form_length(name.trim()) < MIN_NAME_LENGTH {
        return Err("Name must be at least 2 characters");
    }
    Ok(())
}

/// Validate that the confirmation repeats the password exactly
pub fn validate_password_confirmation(
    password: &str,
    confirmation: &str,
) -> Result<(), &'static str> {
    if password != confirmation {
        return Err("Passwords do not match");
    }
    Ok(())
}

fn record(
    errors: &mut ValidationErrors,
    field: &'static str,
    code: &'static str,
    result: Result<(), &'static str>,
) {
    if let Err(message) = result {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        errors.add(field, error);
    }
}

fn finish(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.field_errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(email) = &self.email {
            record(&mut errors, "email", "email", validate_email(email));
        }
        if let Some(password) = &self.password {
            record(&mut errors, "password", "length", validate_password(password));
        }
        finish(errors)
    }
}

impl Validate for RegistrationForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(name) = &self.name {
            record(&mut errors, "name", "length", validate_name(name));
        }
        if let Some(email) = &self.email {
            record(&mut errors, "email", "email", validate_email(email));
        }
        if let Some(password) = &self.password {
            record(&mut errors, "password", "length", validate_password(password));
        }
        if let (Some(password), Some(confirmation)) = (&self.password, &self.confirm_password) {
            record(
                &mut errors,
                "confirm_password",
                "must_match",
                validate_password_confirmation(password, confirmation),
            );
        }
        finish(errors)
    }
}

/// Flatten validation errors into one message per field
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<&'static str, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| {
            let first = list.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field, message))
        })
        .collect()
}

// ============================================================================
// Soil Sample Validations
// ============================================================================

fn in_range<T: PartialOrd + Copy>(value: Option<T>, (min, max): (T, T)) -> bool {
    matches!(value, Some(v) if v >= min && v <= max)
}

/// Validate a soil sample, reporting only the first failing check.
///
/// Order: N, P, K, temperature, humidity, ph, rainfall, region.
pub fn validate_soil_sample(sample: &SoilSample) -> Result<(), SoilValidationError> {
    if !in_range(sample.nitrogen, NITROGEN_RANGE) {
        return Err(SoilValidationError::Nitrogen);
    }
    if !in_range(sample.phosphorus, PHOSPHORUS_RANGE) {
        return Err(SoilValidationError::Phosphorus);
    }
    if !in_range(sample.potassium, POTASSIUM_RANGE) {
        return Err(SoilValidationError::Potassium);
    }
    if !in_range(sample.temperature, TEMPERATURE_RANGE) {
        return Err(SoilValidationError::Temperature);
    }
    if !in_range(sample.humidity, HUMIDITY_RANGE) {
        return Err(SoilValidationError::Humidity);
    }
    if !in_range(sample.ph, PH_RANGE) {
        return Err(SoilValidationError::Ph);
    }
    if !in_range(sample.rainfall, RAINFALL_RANGE) {
        return Err(SoilValidationError::Rainfall);
    }
    if sample.region.parse::<Region>().is_err() {
        return Err(SoilValidationError::Region);
    }
    Ok(())
}
