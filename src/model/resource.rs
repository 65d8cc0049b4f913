use serde::Serialize;
use std::fmt;

/// Value the platform uses to mean "no resource was provided".
const NO_RESOURCE_PROVIDED: i32 = -1;

/// Opaque handle to a bundled image or audio asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(i32);

impl ResourceId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Converts a raw platform handle, mapping the legacy `-1` marker to `None`.
    pub fn from_raw(raw: i32) -> Option<Self> {
        if raw == NO_RESOURCE_PROVIDED {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// True when the raw value equals the legacy "no resource" marker, so
    /// it cannot be stored without reading back as absent.
    pub fn is_reserved(self) -> bool {
        self.0 == NO_RESOURCE_PROVIDED
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
