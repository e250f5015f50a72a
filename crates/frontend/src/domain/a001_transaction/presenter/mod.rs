//! Order Status Presenter
//!
//! Renders one order's status into DOM anchors owned by the page:
//! - badge with the status label (always, unknown values shown as-is)
//! - step indicator and progress bar (only for a recognized status)
//! - status history timeline, newest first
//!
//! Pure computation lives in `contracts::domain::a001_transaction`; this module
//! only writes its result into the document.

mod anchors;
mod error;
mod refresh;
mod render;

pub use anchors::StatusAnchors;
pub use error::{PresenterError, RenderReport};
pub use refresh::{AutoRefresh, REFRESH_INTERVAL_MS};
pub use render::PROGRESS_ANIMATION_DELAY_MS;

use crate::shared::request_sequence::{RequestSequence, RequestTicket};
use contracts::domain::a001_transaction::{OrderSnapshot, StatusPresentation};

/// One presenter per page view
#[derive(Clone, Debug)]
pub struct OrderStatusPresenter {
    anchors: StatusAnchors,
    sequence: RequestSequence,
}

impl OrderStatusPresenter {
    pub fn new(anchors: StatusAnchors) -> Self {
        Self {
            anchors,
            sequence: RequestSequence::new(),
        }
    }

    pub fn anchors(&self) -> &StatusAnchors {
        &self.anchors
    }

    /// Take a ticket before fetching; only the newest ticket may render
    pub fn begin_render(&self) -> RequestTicket {
        self.sequence.issue()
    }

    /// Drop every in-flight render, e.g. when the page unmounts
    pub fn cancel_pending(&self) {
        self.sequence.invalidate();
    }

    /// Write `snapshot` into the page.
    ///
    /// Returns `None` when `ticket` was superseded and nothing was written.
    /// Otherwise every widget is attempted and the ones that could not be
    /// rendered are listed in the report.
    pub fn present(&self, ticket: &RequestTicket, snapshot: &OrderSnapshot) -> Option<RenderReport> {
        if !ticket.is_current() {
            log::debug!(
                "discarding stale render #{} for {}",
                ticket.id(),
                snapshot.code
            );
            return None;
        }

        let mut report = RenderReport::default();
        let document = match render::document() {
            Ok(d) => d,
            Err(e) => {
                report.skipped.push(e);
                return Some(report);
            }
        };

        let presentation = StatusPresentation::from_snapshot(snapshot);

        report.record(render::apply_badge(&document, &self.anchors, &presentation.badge));

        match &presentation.pipeline {
            Ok(pipeline) => {
                report
                    .skipped
                    .extend(render::apply_steps(&document, &self.anchors, pipeline));
                report.record(render::animate_progress(
                    &document,
                    &self.anchors,
                    pipeline.percent,
                    ticket.clone(),
                ));
            }
            Err(e) => {
                // No guessed position: clear whatever a previous render marked
                render::clear_steps(&document, &self.anchors);
                report.record(render::reset_progress(&document, &self.anchors));
                report.skipped.push(e.clone().into());
            }
        }

        report.record(render::apply_timeline(
            &document,
            &self.anchors,
            &presentation.timeline,
        ));

        for skipped in &report.skipped {
            log::warn!("order {}: widget skipped: {}", snapshot.code, skipped);
        }
        Some(report)
    }
}
