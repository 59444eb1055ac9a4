//! Show Summary Types
//!
//! The untrusted upstream record and the fixed-field summary shaped from it.
//! Every upstream field is optional; each summary field has an explicit
//! resolution rule with a sentinel fallback.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedTitle;

/// Sentinel for a value the upstream did not provide.
pub const UNKNOWN: &str = "Desconocido";
/// Sentinel end year for a show that is still running.
pub const AIRING: &str = "En emisión";
/// Sentinel cast entry when no cast is available.
pub const NOT_AVAILABLE: &str = "No disponible";

/// Upstream status value for a show currently on air.
const RUNNING_STATUS: &str = "Running";

/// Maximum number of lead cast members reported.
pub const LEAD_CAST_LIMIT: usize = 3;

// ============================================================
// Upstream Record
// ============================================================

/// Show document as returned by the metadata API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub ended: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub network: Option<Channel>,
    #[serde(default)]
    pub web_channel: Option<Channel>,
    #[serde(default, rename = "_embedded")]
    pub embedded: Option<Embedded>,
}

/// Broadcast network or web channel
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub name: Option<String>,
}

/// Sub-resources requested with `embed=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub cast: Option<Vec<CastCredit>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastCredit {
    #[serde(default)]
    pub person: Option<Person>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub name: Option<String>,
}

impl ShowRecord {
    /// Official title, or [`UNKNOWN`] when the record has none.
    pub fn official_title(&self) -> String {
        non_empty(self.name.as_deref())
            .unwrap_or(UNKNOWN)
            .to_string()
    }

    /// Names of the first [`LEAD_CAST_LIMIT`] cast entries, in source order.
    ///
    /// Entries without a person name are skipped. Falls back to a single
    /// [`NOT_AVAILABLE`] entry.
    pub fn lead_cast(&self) -> Vec<String> {
        let names: Vec<String> = self
            .embedded
            .as_ref()
            .and_then(|embedded| embedded.cast.as_deref())
            .unwrap_or_default()
            .iter()
            .take(LEAD_CAST_LIMIT)
            .filter_map(|credit| credit.person.as_ref())
            .filter_map(|person| non_empty(person.name.as_deref()))
            .map(str::to_string)
            .collect();

        if names.is_empty() {
            vec![NOT_AVAILABLE.to_string()]
        } else {
            names
        }
    }

    pub fn start_year(&self) -> String {
        year_of(self.premiered.as_deref()).unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Year the show ended, [`AIRING`] if it is still running, else [`UNKNOWN`].
    pub fn end_year(&self) -> String {
        if let Some(year) = year_of(self.ended.as_deref()) {
            return year;
        }

        if self.is_running() {
            AIRING.to_string()
        } else {
            UNKNOWN.to_string()
        }
    }

    /// Network name, falling back to the web channel.
    pub fn streaming_platform(&self) -> String {
        let network = self.network.as_ref().and_then(|c| non_empty(c.name.as_deref()));
        let web = self.web_channel.as_ref().and_then(|c| non_empty(c.name.as_deref()));

        network.or(web).unwrap_or(UNKNOWN).to_string()
    }

    pub fn is_running(&self) -> bool {
        self.status.as_deref() == Some(RUNNING_STATUS)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// First four characters of a date string such as `2008-01-20`.
fn year_of(date: Option<&str>) -> Option<String> {
    non_empty(date).map(|d| d.chars().take(4).collect())
}

// ============================================================
// Summary
// ============================================================

/// Simplified show document returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSummary {
    #[serde(rename = "busqueda_original")]
    pub original_query: String,
    #[serde(rename = "titulo_sanitizado")]
    pub normalized_title: String,
    #[serde(rename = "titulo_oficial")]
    pub official_title: String,
    #[serde(rename = "actores_principales")]
    pub lead_cast: Vec<String>,
    #[serde(rename = "ano_inicio")]
    pub start_year: String,
    #[serde(rename = "ano_fin")]
    pub end_year: String,
    #[serde(rename = "plataforma_streaming")]
    pub streaming_platform: String,
}

impl ShowSummary {
    /// Shape a summary from an upstream record.
    pub fn from_record(
        original_query: impl Into<String>,
        title: &NormalizedTitle,
        record: &ShowRecord,
    ) -> Self {
        Self {
            original_query: original_query.into(),
            normalized_title: title.to_string(),
            official_title: record.official_title(),
            lead_cast: record.lead_cast(),
            start_year: record.start_year(),
            end_year: record.end_year(),
            streaming_platform: record.streaming_platform(),
        }
    }
}
