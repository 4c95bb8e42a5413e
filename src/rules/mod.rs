//! Business rules applied to upstream records before they reach the caller.

use crate::config::RulesConfig;
use crate::creature::CreatureRecord;

/// Rejects creatures whose `height` reaches the configured ceiling.
///
/// Records whose height does not read as a number pass.
#[derive(Debug, Clone, Copy)]
pub struct HeightRule {
    max_height: u64,
}

impl HeightRule {
    pub fn new(max_height: u64) -> Self {
        Self { max_height }
    }

    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.max_height)
    }

    pub fn max_height(&self) -> u64 {
        self.max_height
    }

    /// True when the record is small enough to be returned.
    pub fn allows(&self, record: &CreatureRecord) -> bool {
        match record.height() {
            Some(height) => height < self.max_height as f64,
            None => true,
        }
    }
}

impl Default for HeightRule {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_height(height: serde_json::Value) -> CreatureRecord {
        CreatureRecord::new(json!({ "id": 1, "name": "x", "height": height }))
    }

    #[test]
    fn test_threshold_boundary() {
        let rule = HeightRule::default();
        assert_eq!(rule.max_height(), 15);
        assert!(rule.allows(&with_height(json!(11))));
        assert!(rule.allows(&with_height(json!(14.9))));
        assert!(!rule.allows(&with_height(json!(15))));
        assert!(!rule.allows(&with_height(json!(20))));
    }

    #[test]
    fn test_string_height_is_compared_numerically() {
        let rule = HeightRule::default();
        assert!(!rule.allows(&with_height(json!("20"))));
        assert!(!rule.allows(&with_height(json!("15"))));
        assert!(rule.allows(&with_height(json!("11"))));
        assert!(rule.allows(&with_height(json!("very tall"))));
    }

    #[test]
    fn test_missing_height_passes() {
        let rule = HeightRule::default();
        assert!(rule.allows(&CreatureRecord::new(json!({ "id": 1 }))));
        assert!(rule.allows(&with_height(json!(null))));
    }

    #[test]
    fn test_configured_ceiling() {
        let rule = HeightRule::new(30);
        assert!(rule.allows(&with_height(json!(20))));
        assert!(!rule.allows(&with_height(json!(30))));
    }
}
