//! Certificate validity status and how each status is presented.

use egui::Color32;
use serde::Deserialize;

/// Validity of an employee's certificate on a given date.
///
/// Deserialises from any JSON value: the strings `"danger"`, `"warning"` and
/// `"success"` map to their variants, everything else reads as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum ValidityStatus {
    /// Certificate has expired.
    Danger,
    /// Certificate expires within six months.
    Warning,
    /// Certificate is valid.
    Success,
    /// Never certified, or an unrecognised status string.
    #[default]
    None,
}

impl ValidityStatus {
    pub fn color(&self) -> Color32 {
        match self {
            ValidityStatus::Danger => Color32::RED,
            ValidityStatus::Warning => Color32::from_rgb(255, 165, 0),
            ValidityStatus::Success => Color32::from_rgb(0, 128, 0),
            ValidityStatus::None => Color32::GRAY,
        }
    }

    /// Text shown in the hover tooltip.
    pub fn description(&self) -> &'static str {
        match self {
            ValidityStatus::Danger => "certification expired",
            ValidityStatus::Warning => "expires within 6 months",
            ValidityStatus::Success => "certification valid",
            ValidityStatus::None => "never certified",
        }
    }
}

impl From<&str> for ValidityStatus {
    fn from(s: &str) -> Self {
        match s {
            "danger" => ValidityStatus::Danger,
            "warning" => ValidityStatus::Warning,
            "success" => ValidityStatus::Success,
            _ => ValidityStatus::None,
        }
    }
}

impl From<serde_json::Value> for ValidityStatus {
    fn from(v: serde_json::Value) -> Self {
        v.as_str().map(ValidityStatus::from).unwrap_or_default()
    }
}

impl std::fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidityStatus::Danger => write!(f, "danger"),
            ValidityStatus::Warning => write!(f, "warning"),
            ValidityStatus::Success => write!(f, "success"),
            ValidityStatus::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_string_maps_to_none() {
        let s: ValidityStatus = serde_json::from_str("\"revoked\"").unwrap();
        assert_eq!(s, ValidityStatus::None);
    }

    #[test]
    fn non_string_status_maps_to_none() {
        for json in ["5", "true", "{\"code\": 1}", "[\"danger\"]"] {
            let s: ValidityStatus = serde_json::from_str(json).unwrap();
            assert_eq!(s, ValidityStatus::None, "{json}");
        }
    }

    #[test]
    fn known_status_strings_round_trip_through_display() {
        for s in [
            ValidityStatus::Danger,
            ValidityStatus::Warning,
            ValidityStatus::Success,
        ] {
            let parsed: ValidityStatus = serde_json::from_str(&format!("\"{s}\"")).unwrap();
            assert_eq!(parsed, s);
        }
    }
}
