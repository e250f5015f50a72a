use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Laundry pipeline stage of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderStatus {
    Queued,
    Washing,
    Ironing,
    ReadyToPickUp,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("unrecognized status: {raw:?}")]
    Unrecognized { raw: String },
}

/// Accepted spellings, as lowercase words
const STATUS_FORMS: [(&[&str], OrderStatus); 11] = [
    (&["queued"], OrderStatus::Queued),
    (&["antrian"], OrderStatus::Queued),
    (&["washing"], OrderStatus::Washing),
    (&["mencuci"], OrderStatus::Washing),
    (&["ironing"], OrderStatus::Ironing),
    (&["menyetrika"], OrderStatus::Ironing),
    (&["ready", "to", "pick", "up"], OrderStatus::ReadyToPickUp),
    (&["siap", "diambil"], OrderStatus::ReadyToPickUp),
    (&["complete"], OrderStatus::Complete),
    (&["completed"], OrderStatus::Complete),
    (&["selesai"], OrderStatus::Complete),
];

impl OrderStatus {
    /// All stages in pipeline order
    pub const PIPELINE: [OrderStatus; 5] = [
        OrderStatus::Queued,
        OrderStatus::Washing,
        OrderStatus::Ironing,
        OrderStatus::ReadyToPickUp,
        OrderStatus::Complete,
    ];

    /// Parse a raw status string coming from the backend or a user.
    ///
    /// Matching ignores case and surrounding whitespace. Words may be joined by runs of
    /// spaces, `_` or `-`, or written together, so `"ready_to_pick_up"`, `"Ready to pick up"`
    /// and `"ReadyToPickUp"` are the same stage, while a separator inside a word
    /// (`"wa sh ing"`) is rejected. The backend's stored codes (`antrian`, `mencuci`, ...)
    /// are accepted as aliases.
    pub fn normalize(raw: &str) -> Result<Self, StatusError> {
        let words: Vec<String> = raw
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        let matches_form = |form: &[&str]| {
            let spelled_out = words.iter().map(String::as_str).eq(form.iter().copied());
            let joined = words.len() == 1 && words[0] == form.concat();
            spelled_out || joined
        };

        STATUS_FORMS
            .iter()
            .find(|(form, _)| matches_form(form))
            .map(|(_, status)| *status)
            .ok_or_else(|| StatusError::Unrecognized {
                raw: raw.to_string(),
            })
    }

    /// Code the backend stores and expects in requests
    pub fn wire_code(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "antrian",
            OrderStatus::Washing => "mencuci",
            OrderStatus::Ironing => "menyetrika",
            OrderStatus::ReadyToPickUp => "siap_diambil",
            OrderStatus::Complete => "selesai",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "Queued",
            OrderStatus::Washing => "Washing",
            OrderStatus::Ironing => "Ironing",
            OrderStatus::ReadyToPickUp => "Ready to Pick Up",
            OrderStatus::Complete => "Complete",
        }
    }

    /// Stable key used for CSS classes, icons and DOM ids
    pub fn key(&self) -> &'static str {
        match self {
            OrderStatus::Queued => "queued",
            OrderStatus::Washing => "washing",
            OrderStatus::Ironing => "ironing",
            OrderStatus::ReadyToPickUp => "ready-to-pick-up",
            OrderStatus::Complete => "complete",
        }
    }

    /// No further stage follows; the order has been handed back to the customer
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Complete)
    }

    /// Terminal check on a raw backend value; an unrecognized status is never terminal
    pub fn raw_is_terminal(raw: &str) -> bool {
        Self::normalize(raw).is_ok_and(|s| s.is_terminal())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::normalize(s)
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        OrderStatus::normalize(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(OrderStatus::normalize("queued"), Ok(OrderStatus::Queued));
        assert_eq!(OrderStatus::normalize("Queued"), Ok(OrderStatus::Queued));
        assert_eq!(OrderStatus::normalize("QUEUED"), Ok(OrderStatus::Queued));
    }

    #[test]
    fn test_normalize_multi_word_forms() {
        assert_eq!(
            OrderStatus::normalize("ready_to_pick_up"),
            Ok(OrderStatus::ReadyToPickUp)
        );
        assert_eq!(
            OrderStatus::normalize("ready to pick up"),
            Ok(OrderStatus::ReadyToPickUp)
        );
        assert_eq!(
            OrderStatus::normalize("ReadyToPickUp"),
            Ok(OrderStatus::ReadyToPickUp)
        );
        assert_eq!(
            OrderStatus::normalize("  Ready-To-Pick-Up "),
            Ok(OrderStatus::ReadyToPickUp)
        );
    }

    #[test]
    fn test_normalize_completed_alias() {
        assert_eq!(OrderStatus::normalize("completed"), Ok(OrderStatus::Complete));
        assert_eq!(OrderStatus::normalize("Complete"), Ok(OrderStatus::Complete));
    }

    #[test]
    fn test_normalize_backend_codes() {
        let codes: Vec<OrderStatus> = ["antrian", "mencuci", "menyetrika", "siap_diambil", "selesai"]
            .iter()
            .map(|c| OrderStatus::normalize(c).unwrap())
            .collect();
        assert_eq!(codes, OrderStatus::PIPELINE.to_vec());

        for status in OrderStatus::PIPELINE {
            assert_eq!(OrderStatus::normalize(status.wire_code()), Ok(status));
        }
    }

    #[test]
    fn test_normalize_unrecognized() {
        assert_eq!(
            OrderStatus::normalize("bogus_status"),
            Err(StatusError::Unrecognized {
                raw: "bogus_status".to_string()
            })
        );
        assert!(OrderStatus::normalize("").is_err());
        assert!(OrderStatus::normalize("   ").is_err());
    }

    #[test]
    fn test_normalize_rejects_split_words() {
        assert!(OrderStatus::normalize("wa sh ing").is_err());
        assert!(OrderStatus::normalize("read ytopick_up").is_err());
        assert!(OrderStatus::normalize("ready topick up").is_err());
        assert!(OrderStatus::normalize("siapdi_ambil").is_err());
        assert_eq!(
            OrderStatus::normalize("siap__diambil"),
            Ok(OrderStatus::ReadyToPickUp)
        );
        assert_eq!(
            OrderStatus::normalize("SiapDiambil"),
            Ok(OrderStatus::ReadyToPickUp)
        );
    }

    #[test]
    fn test_only_complete_is_terminal() {
        let terminal: Vec<OrderStatus> = OrderStatus::PIPELINE
            .into_iter()
            .filter(OrderStatus::is_terminal)
            .collect();
        assert_eq!(terminal, vec![OrderStatus::Complete]);

        assert!(OrderStatus::raw_is_terminal("selesai"));
        assert!(OrderStatus::raw_is_terminal("Completed"));
        assert!(!OrderStatus::raw_is_terminal("siap_diambil"));
        assert!(!OrderStatus::raw_is_terminal("dry_cleaning"));
    }

    #[test]
    fn test_serde_uses_wire_code() {
        let json = serde_json::to_string(&OrderStatus::ReadyToPickUp).unwrap();
        assert_eq!(json, "\"siap_diambil\"");

        let parsed: OrderStatus = serde_json::from_str("\"Washing\"").unwrap();
        assert_eq!(parsed, OrderStatus::Washing);

        assert!(serde_json::from_str::<OrderStatus>("\"dry_cleaning\"").is_err());
    }
}
