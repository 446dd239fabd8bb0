use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What happens to a waitlisted guest whose automatic booking is refused
/// (they already hold another room by the time their turn comes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionFallback {
    /// The candidate leaves the waitlist for good.
    #[default]
    Drop,
    /// The candidate goes back to the head of the waitlist.
    Requeue,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub on_rejected_promotion: PromotionFallback,
    /// Queue a [`Notification`](crate::Notification) for every change. Off by
    /// default, since nothing drains the queue unless the caller does.
    pub notifications: bool,
}

impl RegistryConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = RegistryConfig::from_json("{}").unwrap();
        assert_eq!(config, RegistryConfig::default());
        assert_eq!(config.on_rejected_promotion, PromotionFallback::Drop);
        assert!(!config.notifications);
    }

    #[test]
    fn requeue_from_json() {
        let config = RegistryConfig::from_json(r#"{"on_rejected_promotion":"requeue"}"#).unwrap();
        assert_eq!(config.on_rejected_promotion, PromotionFallback::Requeue);
    }

    #[test]
    fn notifications_opt_in_from_json() {
        let config = RegistryConfig::from_json(r#"{"notifications":true}"#).unwrap();
        assert!(config.notifications);
        assert_eq!(config.on_rejected_promotion, PromotionFallback::Drop);
    }

    #[test]
    fn unknown_fallback_is_rejected() {
        assert!(RegistryConfig::from_json(r#"{"on_rejected_promotion":"retry"}"#).is_err());
    }
}
