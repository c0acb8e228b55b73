use serde::{Deserialize, Serialize};

/// A farmer as stored by the backend.
///
/// `id` is assigned by the store on creation and is `None` before the first
/// insert. The same struct is used for `PUT` payloads, where a `None` field
/// means "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Farmer {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Farmer {
            id: None,
            name: Some(name.into()),
            location: Some(location.into()),
        }
    }

    /// Copies every non-null field of `updates` onto `self`.
    pub fn merge(&mut self, updates: Farmer) {
        if let Some(name) = updates.name {
            self.name = Some(name);
        }
        if let Some(location) = updates.location {
            self.location = Some(location);
        }
    }
}
