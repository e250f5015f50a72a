use super::status::OrderStatus;

/// Display data for a status badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub label: String,
    /// Style/icon key, used as `badge--status-{key}`
    pub style_key: String,
    /// `None` when the raw value was not a known status
    pub status: Option<OrderStatus>,
}

impl BadgeSpec {
    pub fn css_class(&self) -> String {
        format!("badge badge--status badge--status-{}", self.style_key)
    }

    pub fn is_recognized(&self) -> bool {
        self.status.is_some()
    }
}

impl From<OrderStatus> for BadgeSpec {
    fn from(status: OrderStatus) -> Self {
        Self {
            label: status.label().to_string(),
            style_key: status.key().to_string(),
            status: Some(status),
        }
    }
}

/// Badge for a raw status string.
///
/// Never fails: unknown values are shown as-is with a style key derived from the
/// raw text, so a badge still renders when the pipeline widgets cannot.
pub fn badge_for_raw(raw: &str) -> BadgeSpec {
    match OrderStatus::normalize(raw) {
        Ok(status) => status.into(),
        Err(_) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return BadgeSpec {
                    label: "-".to_string(),
                    style_key: "unknown".to_string(),
                    status: None,
                };
            }
            BadgeSpec {
                label: trimmed.to_string(),
                style_key: trimmed
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-")
                    .to_lowercase(),
                status: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status() {
        let badge = badge_for_raw("siap_diambil");
        assert_eq!(badge.label, "Ready to Pick Up");
        assert_eq!(badge.style_key, "ready-to-pick-up");
        assert_eq!(badge.status, Some(OrderStatus::ReadyToPickUp));
        assert_eq!(
            badge.css_class(),
            "badge badge--status badge--status-ready-to-pick-up"
        );
    }

    #[test]
    fn test_unknown_status_falls_back_to_identity() {
        let badge = badge_for_raw("Dry Cleaning  Only");
        assert_eq!(badge.label, "Dry Cleaning  Only");
        assert_eq!(badge.style_key, "dry-cleaning-only");
        assert!(!badge.is_recognized());
    }

    #[test]
    fn test_empty_status() {
        let badge = badge_for_raw("");
        assert_eq!(badge.label, "-");
        assert_eq!(badge.style_key, "unknown");
    }
}
