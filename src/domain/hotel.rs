use serde::{Deserialize, Serialize};

/// Projection of a hotel document as returned by the hosted index.
///
/// Only the fields requested through the query projection are mapped; the
/// remaining document attributes are ignored during deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    #[serde(rename = "HotelName", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

impl Hotel {
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
