use std::collections::BTreeMap;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Inbound request to provision an ephemeral environment.
///
/// Every field is optional on the wire: missing fields take their empty/zero
/// value and unknown fields are ignored, so the presentation layer can post
/// partially filled forms straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentRequest {
    /// DNS-label identifier chosen by the caller.
    pub name: String,
    /// Source-control ref to deploy.
    pub branch: String,
    /// CPU quantity, e.g. `100m`. Empty means unset.
    pub cpu: String,
    /// Memory quantity, e.g. `256Mi`. Empty means unset.
    pub memory: String,
    /// Replica count. Any whole number decodes (saturating at the `i64`
    /// bounds) so out-of-range wire values reach validation instead of
    /// failing deserialization.
    #[serde(deserialize_with = "replica_count")]
    pub replicas: i64,
    /// Auxiliary services to deploy alongside the app, in order.
    pub dependencies: Vec<String>,
    /// Environment type (`dev`, `staging`, `prod`), or empty.
    pub env_type: String,
    /// Variables injected into the primary container. Ordered by key.
    pub env_vars: BTreeMap<String, String>,
}

fn replica_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct ReplicaCount;

    impl Visitor<'_> for ReplicaCount {
        type Value = i64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a whole number of replicas")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        // `1e10` arrives as a float; float-to-int casts saturate.
        #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.is_finite() && v.trunc() == v {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(ReplicaCount)
}

/// One managed environment as reported by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    pub id: String,
    pub name: String,
    pub status: String,
    pub url: String,
}

/// Listing envelope returned to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentList {
    pub items: Vec<EnvironmentSummary>,
}

/// Acknowledgement for a submitted environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEnvironment {
    pub id: String,
    pub status: String,
    pub url: String,
}
