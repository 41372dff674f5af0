//! Translation of the controller's application listing into summaries.
//!
//! Pure functions only. Both gateway implementations funnel their raw
//! listings through [`summarize`] so ownership filtering and URL derivation
//! behave identically in dev and production.

use std::collections::HashMap;

use meeseeks_common::EnvironmentSummary;
use serde::{Deserialize, Serialize};

use crate::domain::config::Topology;
use crate::domain::descriptor::{OWNERSHIP_LABEL, OWNERSHIP_VALUE};

/// Body of `GET /api/v1/applications`, reduced to the fields we read.
///
/// Argo CD returns `"items": null` for an empty list, hence the custom default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<RemoteApplication>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteApplication {
    pub metadata: RemoteMetadata,
    pub status: RemoteStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteMetadata {
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteStatus {
    pub health: RemoteHealth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteHealth {
    pub status: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RemoteApplication {
    /// Build a managed application record; used by the stand-in and tests.
    #[must_use]
    pub fn managed(name: &str, health: &str) -> Self {
        Self {
            metadata: RemoteMetadata {
                name: name.to_string(),
                labels: HashMap::from([(
                    OWNERSHIP_LABEL.to_string(),
                    OWNERSHIP_VALUE.to_string(),
                )]),
            },
            status: RemoteStatus {
                health: RemoteHealth {
                    status: health.to_string(),
                },
            },
        }
    }

    #[must_use]
    pub fn is_managed(&self) -> bool {
        self.metadata.labels.get(OWNERSHIP_LABEL).map(String::as_str) == Some(OWNERSHIP_VALUE)
    }
}

/// Keep applications carrying the ownership marker and map each to a summary.
#[must_use]
pub fn summarize(list: ApplicationList, topology: &Topology) -> Vec<EnvironmentSummary> {
    list.items
        .into_iter()
        .filter(RemoteApplication::is_managed)
        .map(|app| {
            let name = app.metadata.name;
            EnvironmentSummary {
                id: name.clone(),
                url: topology.environment_url(&name),
                name,
                status: app.status.health.status,
            }
        })
        .collect()
}
