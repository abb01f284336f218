//! Record source
//!
//! Record and payload types for the grid's data source, plus loading from an
//! HTTP endpoint or a local JSON file. Transport and parse failures fold into
//! the error sentinel so the grid can still run and display them.

use std::borrow::Cow;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Field holding the archived flag. Records carry 1 for live items.
pub const ENABLED_FIELD: &str = "enabled";

/// One row of underlying data: an opaque mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names, for deriving a column list when none is configured.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Display text of a field. Absent and null values coerce to the empty
    /// string; other scalars to their JSON display text.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Whether the record is live. Anything but an exact 1 counts as
    /// archived.
    pub fn is_enabled(&self) -> bool {
        self.fields
            .get(ENABLED_FIELD)
            .and_then(Value::as_i64)
            .map(|v| v == 1)
            .unwrap_or(false)
    }
}

/// The record array as supplied by the data source, or the error it reported.
#[derive(Debug, Clone)]
pub enum SourceData {
    Records(Vec<Record>),
    Error(String),
}

impl SourceData {
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            SourceData::Records(records) => Some(records),
            SourceData::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SourceData::Records(_) => None,
            SourceData::Error(message) => Some(message),
        }
    }
}

/// A parsed payload: the record set plus the column list when the backend
/// supplies one.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub source: SourceData,
    pub columns: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Rows(Vec<Record>),
    Envelope {
        #[serde(default)]
        error: Option<String>,
        #[serde(default)]
        data: Vec<Record>,
        #[serde(default)]
        columns: Vec<String>,
    },
}

/// Parse a JSON payload. Accepted forms: a bare array of records, an
/// `{"error": ...}` envelope, or a `{"data": [...], "columns": [...]}`
/// envelope.
pub fn parse_payload(body: &str) -> LoadedData {
    match serde_json::from_str::<Payload>(body) {
        Ok(Payload::Rows(records)) => LoadedData {
            source: SourceData::Records(records),
            columns: Vec::new(),
        },
        Ok(Payload::Envelope {
            error: Some(message),
            ..
        }) => LoadedData {
            source: SourceData::Error(message),
            columns: Vec::new(),
        },
        Ok(Payload::Envelope { data, columns, .. }) => LoadedData {
            source: SourceData::Records(data),
            columns,
        },
        Err(e) => LoadedData {
            source: SourceData::Error(format!("invalid payload: {}", e)),
            columns: Vec::new(),
        },
    }
}

/// Load records from `location`: `http(s)://` fetches over the network,
/// anything else reads a local file.
pub async fn load(location: &str) -> LoadedData {
    let body = if location.starts_with("http://") || location.starts_with("https://") {
        fetch(location).await
    } else {
        std::fs::read_to_string(Path::new(location))
            .map_err(|e| format!("failed to read {}: {}", location, e))
    };

    match body {
        Ok(body) => parse_payload(&body),
        Err(message) => LoadedData {
            source: SourceData::Error(message),
            columns: Vec::new(),
        },
    }
}

async fn fetch(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("request to {} failed: {}", url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("{} returned {}", url, status));
    }

    response
        .text()
        .await
        .map_err(|e| format!("failed to read response from {}: {}", url, e))
}
