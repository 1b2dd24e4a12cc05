//! Soil sample models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Agro-climatic regions served by the prediction model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    #[serde(rename = "Western Maharashtra")]
    WesternMaharashtra,
    #[serde(rename = "Khandesh/North Maharashtra")]
    KhandeshNorthMaharashtra,
    #[serde(rename = "Vidarbha")]
    Vidarbha,
    #[serde(rename = "Marathwada")]
    Marathwada,
    #[serde(rename = "Konkan")]
    Konkan,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::WesternMaharashtra,
        Region::KhandeshNorthMaharashtra,
        Region::Vidarbha,
        Region::Marathwada,
        Region::Konkan,
    ];

    /// Name as submitted by the region select element
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::WesternMaharashtra => "Western Maharashtra",
            Region::KhandeshNorthMaharashtra => "Khandesh/North Maharashtra",
            Region::Vidarbha => "Vidarbha",
            Region::Marathwada => "Marathwada",
            Region::Konkan => "Konkan",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// Raw field values read from the soil-analysis form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilFormInput {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
    pub region: String,
}

/// A soil measurement submitted for a crop recommendation.
///
/// Numeric fields are `None` when the form value could not be read as a
/// number; such a sample fails validation on that field's range check.
/// `region` stays a plain string so that membership is checked by the
/// validator in its fixed position rather than at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    #[serde(rename = "N")]
    pub nitrogen: Option<i32>,
    #[serde(rename = "P")]
    pub phosphorus: Option<i32>,
    #[serde(rename = "K")]
    pub potassium: Option<i32>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub ph: Option<f64>,
    pub rainfall: Option<f64>,
    pub region: String,
}

impl SoilSample {
    /// Build a sample from raw form values
    pub fn from_form(input: &SoilFormInput) -> Self {
        Self {
            nitrogen: parse_int(&input.nitrogen),
            phosphorus: parse_int(&input.phosphorus),
            potassium: parse_int(&input.potassium),
            temperature: parse_float(&input.temperature),
            humidity: parse_float(&input.humidity),
            ph: parse_float(&input.ph),
            rainfall: parse_float(&input.rainfall),
            region: input.region.clone(),
        }
    }

    /// N/P/K levels, present only when all three parsed
    pub fn nutrients(&self) -> Option<NutrientLevels> {
        Some(NutrientLevels {
            nitrogen: self.nitrogen?,
            phosphorus: self.phosphorus?,
            potassium: self.potassium?,
        })
    }
}

/// Nitrogen, phosphorus and potassium readings of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutrientLevels {
    pub nitrogen: i32,
    pub phosphorus: i32,
    pub potassium: i32,
}

/// Integer form value; decimals are truncated toward zero ("12.7" -> 12).
/// Exponent notation is read as a number ("1e3" -> 1000) and trailing text
/// makes the value unreadable.
fn parse_int(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(v) = raw.parse::<i32>() {
        return Some(v);
    }
    let v = parse_float(raw)?;
    let truncated = v.trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return None;
    }
    Some(truncated as i32)
}

/// Float form value; NaN and infinities count as unreadable
fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
