//! Emergency contact directory

use serde::Serialize;
use std::collections::BTreeMap;

/// Static emergency numbers served to clients
///
/// Built once at startup from the defaults plus configured overrides and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmergencyDirectory(BTreeMap<String, String>);

impl Default for EmergencyDirectory {
    fn default() -> Self {
        let contacts = [("police", "100"), ("ambulance", "108"), ("fire", "101")]
            .into_iter()
            .map(|(service, number)| (service.to_string(), number.to_string()))
            .collect();
        Self(contacts)
    }
}

impl EmergencyDirectory {
    /// Add new services or replace default numbers
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        for (service, number) in overrides {
            let number = number.trim().to_string();
            if number.is_empty() {
                continue;
            }
            self.0.insert(service.to_lowercase(), number);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl EmergencyDirectory {
        fn get(&self, service: &str) -> Option<&str> {
            self.0.get(service).map(String::as_str)
        }

        fn len(&self) -> usize {
            self.0.len()
        }
    }

    #[test]
    fn test_default_numbers() {
        let directory = EmergencyDirectory::default();
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.get("police"), Some("100"));
        assert_eq!(directory.get("ambulance"), Some("108"));
        assert_eq!(directory.get("fire"), Some("101"));
    }

    #[test]
    fn test_overrides_extend_and_replace() {
        let overrides = BTreeMap::from([
            ("Police".to_string(), "112".to_string()),
            ("coast_guard".to_string(), "1554".to_string()),
            ("fire".to_string(), "  ".to_string()),
        ]);

        let directory = EmergencyDirectory::default().with_overrides(overrides);
        assert_eq!(directory.get("police"), Some("112"));
        assert_eq!(directory.get("coast_guard"), Some("1554"));
        assert_eq!(directory.get("fire"), Some("101"));
        assert_eq!(directory.len(), 4);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let json = serde_json::to_value(EmergencyDirectory::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "police": "100", "ambulance": "108", "fire": "101" })
        );
    }
}
