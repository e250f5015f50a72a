use contracts::domain::a001_transaction::StatusError;
use thiserror::Error;

/// Why a single widget was not rendered
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PresenterError {
    #[error("element #{id} not found")]
    MissingElement { id: String },
    #[error(transparent)]
    UnrecognizedStatus(#[from] StatusError),
    #[error("no document available")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Widgets skipped during one render pass
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderReport {
    pub skipped: Vec<PresenterError>,
}

impl RenderReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub(crate) fn record(&mut self, result: Result<(), PresenterError>) {
        if let Err(e) = result {
            self.skipped.push(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_collects_errors() {
        let mut report = RenderReport::default();
        report.record(Ok(()));
        assert!(report.is_complete());

        report.record(Err(PresenterError::MissingElement {
            id: "trx-progress-bar".to_string(),
        }));
        assert!(!report.is_complete());
        assert_eq!(
            report.skipped[0].to_string(),
            "element #trx-progress-bar not found"
        );
    }

    #[test]
    fn test_status_error_message_passes_through() {
        let err: PresenterError = StatusError::Unrecognized {
            raw: "bogus".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "unrecognized status: \"bogus\"");
    }
}
