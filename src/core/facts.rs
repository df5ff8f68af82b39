use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric(Option<u64>);

impl Metric {
    pub const UNKNOWN: Metric = Metric(None);

    pub const fn known(value: u64) -> Self {
        Metric(Some(value))
    }

    pub const fn value(self) -> Option<u64> {
        self.0
    }

    pub fn meets(self, threshold: u64) -> bool {
        self.0.is_some_and(|v| v >= threshold)
    }
}

impl From<u64> for Metric {
    fn from(value: u64) -> Self {
        Metric::known(value)
    }
}

impl Serialize for Metric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(v) => serializer.serialize_u64(v),
            None => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MetricVisitor;

        impl Visitor<'_> for MetricVisitor {
            type Value = Metric;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("非負整数または \"unknown\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Metric, E> {
                Ok(Metric::known(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Metric, E> {
                u64::try_from(v)
                    .map(Metric::known)
                    .map_err(|_| E::custom(format!("負の値は指定できません: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Metric, E> {
                if v == "unknown" {
                    Ok(Metric::UNKNOWN)
                } else {
                    Err(E::custom(format!(
                        "整数または \"unknown\" を指定してください: {v}"
                    )))
                }
            }
        }

        deserializer.deserialize_any(MetricVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "SSD")]
    Ssd,
    #[serde(rename = "HDD")]
    Hdd,
    #[serde(rename = "unknown")]
    Unknown,
}

impl StorageType {
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageType::Ssd => "SSD",
            StorageType::Hdd => "HDD",
            StorageType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StorageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFacts {
    pub os_name: String,
    pub cpu_cores: Metric,
    pub cpu_model: String,
    pub ram_gb: Metric,
    pub storage_free_gb: Metric,
    pub storage_type: StorageType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_unknown_fails_every_threshold() {
        assert!(!Metric::UNKNOWN.meets(0));
        assert!(!Metric::UNKNOWN.meets(2));
        assert!(Metric::known(2).meets(2));
        assert!(!Metric::known(1).meets(2));
    }

    #[test]
    fn metric_serializes_as_integer_or_unknown() {
        assert_eq!(
            serde_json::to_value(Metric::known(8)).expect("serialize"),
            serde_json::json!(8)
        );
        assert_eq!(
            serde_json::to_value(Metric::UNKNOWN).expect("serialize"),
            serde_json::json!("unknown")
        );
    }

    #[test]
    fn metric_roundtrips_both_shapes() {
        let known: Metric = serde_json::from_str("32").expect("parse integer");
        assert_eq!(known, Metric::known(32));
        let unknown: Metric = serde_json::from_str("\"unknown\"").expect("parse sentinel");
        assert_eq!(unknown, Metric::UNKNOWN);
        assert!(serde_json::from_str::<Metric>("\"lots\"").is_err());
    }
}
