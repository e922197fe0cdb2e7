//! Configuration and statistics types for publishers.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Publisher configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherConfig {
    /// Label attached to every log event from this publisher.
    pub name: String,

    /// Capacity hint for the subscriber list.
    pub initial_capacity: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            name: "publisher".to_string(),
            initial_capacity: 0,
        }
    }
}

impl PublisherConfig {
    /// Config with the given name and default everything else.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Counters describing a publisher's activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PublisherStats {
    /// Number of `publish` calls.
    pub published: u64,
    /// Number of individual `receive` calls made.
    pub deliveries: u64,
    /// Subscriber entries currently registered (duplicates counted).
    pub subscribers: usize,
}
