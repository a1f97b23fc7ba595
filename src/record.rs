//! Sparse per-key records.
//!
//! A `CanonicalRecord` only carries attributes that had a non-empty value in
//! the source row. A missing attribute means "unknown", never "empty", and
//! the serialized form omits the key entirely.

use serde::{Deserialize, Serialize};

/// Compacted attribute bundle emitted for one accepted key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonicalRecord {
    #[serde(rename = "b", default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,

    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    #[serde(rename = "co", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CanonicalRecord {
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// True when at least one identifying attribute (brand, type, issuer) is known
    pub fn is_meaningful(&self) -> bool {
        self.brand.is_some() || self.card_type.is_some() || self.issuer.is_some()
    }

    /// Number of populated attributes
    pub fn len(&self) -> usize {
        [
            &self.brand,
            &self.card_type,
            &self.category,
            &self.issuer,
            &self.country,
        ]
        .iter()
        .filter(|value| value.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder that ignores empty values
#[derive(Debug, Default)]
pub struct RecordBuilder {
    record: CanonicalRecord,
}

impl RecordBuilder {
    pub fn brand(mut self, value: &str) -> Self {
        self.record.brand = present(value);
        self
    }

    pub fn card_type(mut self, value: &str) -> Self {
        self.record.card_type = present(value);
        self
    }

    pub fn category(mut self, value: &str) -> Self {
        self.record.category = present(value);
        self
    }

    pub fn issuer(mut self, value: &str) -> Self {
        self.record.issuer = present(value);
        self
    }

    pub fn country(mut self, value: &str) -> Self {
        self.record.country = present(value);
        self
    }

    pub fn build(self) -> CanonicalRecord {
        self.record
    }
}

fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_skips_empty_values() {
        let record = CanonicalRecord::builder()
            .brand("VISA")
            .card_type("")
            .category("CLASSIC")
            .issuer("")
            .country("US")
            .build();

        assert_eq!(record.brand.as_deref(), Some("VISA"));
        assert_eq!(record.card_type, None);
        assert_eq!(record.issuer, None);
        assert_eq!(record.len(), 3);
        assert!(record.is_meaningful());
    }

    #[test]
    fn test_category_and_country_alone_are_not_meaningful() {
        let record = CanonicalRecord::builder()
            .category("GOLD")
            .country("GB")
            .build();
        assert!(!record.is_meaningful());
        assert!(!record.is_empty());
    }

    #[test]
    fn test_serializes_with_short_codes_in_fixed_order() {
        let record = CanonicalRecord::builder()
            .country("US")
            .issuer("JPMORGAN CHASE")
            .category("CLASSIC")
            .card_type("CREDIT")
            .brand("VISA")
            .build();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"b":"VISA","t":"CREDIT","c":"CLASSIC","i":"JPMORGAN CHASE","co":"US"}"#
        );
    }

    #[test]
    fn test_absent_attributes_are_omitted() {
        let record = CanonicalRecord::builder().issuer("BIGBANK").build();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"i":"BIGBANK"}"#);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: CanonicalRecord = serde_json::from_str(r#"{"t":"DEBIT","co":"DE"}"#).unwrap();
        assert_eq!(record.card_type.as_deref(), Some("DEBIT"));
        assert_eq!(record.country.as_deref(), Some("DE"));
        assert_eq!(record.brand, None);
    }
}
