//! Static JSON fixtures: per-date certificate records turned into sorted series.
//!
//! Shape:
//! ```json
//! { "2016-01-01": { "certificates": { "1": { "count": 3, "target": 5, "validityStatus": "success" } } } }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::data::points::{LabeledPoint, TimedPoint, Timestamp};
use crate::data::status::ValidityStatus;
use crate::error::{ChartError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRecord {
    #[serde(default)]
    pub count: Option<f64>,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub validity_status: Option<ValidityStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawEntry {
    #[serde(default)]
    certificates: HashMap<String, CertificateRecord>,
}

/// One dated fixture entry.
#[derive(Debug, Clone)]
pub struct FixtureEntry {
    /// Key as written in the file, kept for error messages.
    pub key: String,
    pub date: Timestamp,
    pub certificates: HashMap<String, CertificateRecord>,
}

/// A parsed fixture, entries sorted ascending by date.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    entries: Vec<FixtureEntry>,
}

/// Parse a fixture key: RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as
/// UTC, or a plain `YYYY-MM-DD` date at UTC midnight.
pub fn parse_date_key(key: &str) -> Result<Timestamp> {
    let key = key.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(key, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&ndt));
    }
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
        .ok_or_else(|| ChartError::InvalidDate {
            key: key.to_string(),
        })
}

impl Fixture {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_str(json)?;
        let mut entries = raw
            .into_iter()
            .map(|(key, entry)| {
                Ok(FixtureEntry {
                    date: parse_date_key(&key)?,
                    key,
                    certificates: entry.certificates,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.date);
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::from_json_str(&json)?;
        log::info!(
            "loaded fixture {} ({} entries)",
            path.display(),
            fixture.entries.len()
        );
        Ok(fixture)
    }

    pub fn entries(&self) -> &[FixtureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count/target series of certificate `id`. Every entry must record it.
    pub fn certification_series(&self, id: &str) -> Result<Vec<TimedPoint>> {
        let series = self
            .entries
            .iter()
            .map(|e| {
                let rec = e
                    .certificates
                    .get(id)
                    .ok_or_else(|| ChartError::MissingCertificate {
                        date: e.key.clone(),
                        id: id.to_string(),
                    })?;
                Ok(TimedPoint::new(
                    e.date,
                    rec.count.unwrap_or(0.0),
                    rec.target.unwrap_or(0.0),
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("certificate {id}: {} count/target samples", series.len());
        Ok(series)
    }

    /// Status series of certificate `id`; dates without a record read as
    /// [`ValidityStatus::None`].
    pub fn status_series(&self, id: &str) -> Result<Vec<LabeledPoint<ValidityStatus>>> {
        let series: Vec<_> = self
            .entries
            .iter()
            .map(|e| {
                let status = e
                    .certificates
                    .get(id)
                    .and_then(|rec| rec.validity_status)
                    .unwrap_or_default();
                LabeledPoint::new(e.date, status)
            })
            .collect();
        log::debug!("certificate {id}: {} status samples", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_only_key_is_utc_midnight() {
        let d = parse_date_key("2016-03-01").unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2016, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_key_is_converted_to_utc() {
        let d = parse_date_key("2016-03-01T02:00:00+02:00").unwrap();
        assert_eq!(d, Utc.with_ymd_and_hms(2016, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn garbage_key_is_rejected() {
        assert!(matches!(
            parse_date_key("yesterday"),
            Err(ChartError::InvalidDate { .. })
        ));
    }
}
