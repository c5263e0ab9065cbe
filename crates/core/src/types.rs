use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque resource identifier issued by the backend (`account_sid`,
/// `application_sid`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sid(String);

impl Sid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty sid never names a resource.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop an empty sid so it reads as absent.
    pub fn present(sid: Option<Sid>) -> Option<Sid> {
        sid.filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Sid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Sid {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Sid {
    fn from(value: String) -> Self {
        Self(value)
    }
}
