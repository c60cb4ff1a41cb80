use serde::{Deserialize, Serialize};
use std::fmt;

/// WCA person identifier (e.g. "2009ZEMD01"). Unique within a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WcaId(pub String);

impl WcaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WcaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WcaId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
