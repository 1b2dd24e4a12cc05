//! WebAssembly module for the FarmHelp site
//!
//! Binds the page forms on load:
//! - Login and registration field validation
//! - Soil analysis submission to `/predict` and result rendering
//!
//! The pure validators are also exported for scripts that want them.

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

pub mod dom;
pub mod fetch;
pub mod forms;

// Re-export shared types for use in JavaScript glue
pub use shared::models::*;
pub use shared::validation::*;

use shared::{Validate, ValidationErrors};

/// Initialize the WASM module and attach form handlers
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let Some(document) = window.document() else {
        return Ok(());
    };
    forms::bind_all(&window, &document)
}

fn messages_json(result: Result<(), ValidationErrors>) -> String {
    let messages: BTreeMap<&str, String> = match result {
        Ok(()) => BTreeMap::new(),
        Err(errors) => field_messages(&errors),
    };
    serde_json::to_string(&messages).unwrap_or_else(|_| "{}".to_string())
}

/// Soil form check; returns the first error message, if any
#[wasm_bindgen]
pub fn soil_sample_error(
    nitrogen: &str,
    phosphorus: &str,
    potassium: &str,
    temperature: &str,
    humidity: &str,
    ph: &str,
    rainfall: &str,
    region: &str,
) -> Option<String> {
    let input = SoilFormInput {
        nitrogen: nitrogen.to_string(),
        phosphorus: phosphorus.to_string(),
        potassium: potassium.to_string(),
        temperature: temperature.to_string(),
        humidity: humidity.to_string(),
        ph: ph.to_string(),
        rainfall: rainfall.to_string(),
        region: region.to_string(),
    };
    validate_soil_sample(&SoilSample::from_form(&input))
        .err()
        .map(|e| e.to_string())
}

/// Login check; returns a JSON object of field -> message
#[wasm_bindgen]
pub fn login_errors(email: &str, password: &str) -> String {
    let form = LoginForm {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    };
    messages_json(form.validate())
}

/// Registration check; returns a JSON object of field -> message
#[wasm_bindgen]
pub fn registration_errors(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> String {
    let form = RegistrationForm {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
        confirm_password: Some(confirm_password.to_string()),
    };
    messages_json(form.validate())
}

/// Known regions as a JSON array
#[wasm_bindgen]
pub fn known_regions() -> String {
    let names: Vec<&str> = Region::ALL.iter().map(|r| r.as_str()).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soil_sample_error_reports_first_field() {
        let err = soil_sample_error("200", "200", "43", "20", "80", "6.5", "200", "Konkan");
        assert_eq!(err.as_deref(), Some("Nitrogen (N) must be between 0 and 140"));
    }

    #[test]
    fn test_soil_sample_error_accepts_valid_input() {
        let err = soil_sample_error("90", "42", "43", "20.8", "82", "6.5", "202.9", "Marathwada");
        assert_eq!(err, None);
    }

    #[test]
    fn test_soil_sample_error_non_numeric() {
        let err = soil_sample_error("90", "42", "43", "warm", "82", "6.5", "202.9", "Konkan");
        assert_eq!(err.as_deref(), Some("Temperature must be between 0 and 50°C"));
    }

    #[test]
    fn test_login_errors_json() {
        assert_eq!(login_errors("farmer@example.com", "abc123"), "{}");
        let json: BTreeMap<String, String> =
            serde_json::from_str(&login_errors("farmer", "abc12")).unwrap();
        assert_eq!(json["email"], "Please enter a valid email address");
        assert_eq!(json["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn test_registration_errors_json() {
        let json: BTreeMap<String, String> =
            serde_json::from_str(&registration_errors("A", "a@b.co", "abc123", "abc124"))
                .unwrap();
        assert_eq!(json.len(), 2);
        assert_eq!(json["name"], "Name must be at least 2 characters");
        assert_eq!(json["confirm_password"], "Passwords do not match");
    }

    #[test]
    fn test_known_regions() {
        let regions: Vec<String> = serde_json::from_str(&known_regions()).unwrap();
        assert_eq!(regions.len(), 5);
        assert!(regions.contains(&"Khandesh/North Maharashtra".to_string()));
    }
}
