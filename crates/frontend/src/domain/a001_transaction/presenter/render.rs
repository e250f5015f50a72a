//! DOM writers for the status widgets. Every function touches one widget and
//! reports its own failure, so the caller can keep rendering the rest.

use super::anchors::StatusAnchors;
use super::error::PresenterError;
use crate::shared::date_utils::format_local;
use crate::shared::request_sequence::RequestTicket;
use contracts::domain::a001_transaction::{
    BadgeSpec, OrderStatus, PipelineView, Timeline, TimelineEntry, EMPTY_TIMELINE_PLACEHOLDER,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// Delay before the progress bar grows to its target width
pub const PROGRESS_ANIMATION_DELAY_MS: u32 = 100;

const STEP_CLASSES: [&str; 2] = ["active", "completed"];

fn dom_err(e: wasm_bindgen::JsValue) -> PresenterError {
    PresenterError::Dom(format!("{:?}", e))
}

pub(super) fn document() -> Result<Document, PresenterError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PresenterError::NoDocument)
}

fn find(document: &Document, id: &str) -> Result<Element, PresenterError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PresenterError::MissingElement { id: id.to_string() })
}

fn find_html(document: &Document, id: &str) -> Result<HtmlElement, PresenterError> {
    find(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PresenterError::Dom(format!("#{} is not an HTML element", id)))
}

pub(super) fn apply_badge(
    document: &Document,
    anchors: &StatusAnchors,
    badge: &BadgeSpec,
) -> Result<(), PresenterError> {
    let el = find(document, &anchors.badge_id)?;
    el.set_class_name(&badge.css_class());
    el.set_text_content(Some(&badge.label));
    Ok(())
}

/// Mark steps before the current one completed and the current one active.
/// A missing step element is reported and the other steps are still updated.
pub(super) fn apply_steps(
    document: &Document,
    anchors: &StatusAnchors,
    pipeline: &PipelineView,
) -> Vec<PresenterError> {
    let mut skipped = Vec::new();
    for step in &pipeline.steps {
        let result = find(document, &anchors.step_id(step.stage)).and_then(|el| {
            let classes = el.class_list();
            for class in STEP_CLASSES {
                classes.remove_1(class).map_err(dom_err)?;
            }
            if let Some(class) = step.state.css_class() {
                classes.add_1(class).map_err(dom_err)?;
            }
            Ok(())
        });
        if let Err(e) = result {
            skipped.push(e);
        }
    }
    skipped
}

/// Remove every step marker, used when the status cannot be placed on the pipeline
pub(super) fn clear_steps(document: &Document, anchors: &StatusAnchors) {
    for stage in OrderStatus::PIPELINE {
        if let Ok(el) = find(document, &anchors.step_id(stage)) {
            for class in STEP_CLASSES {
                let _ = el.class_list().remove_1(class);
            }
        }
    }
}

fn set_bar_width(bar: &HtmlElement, percent: u8) -> Result<(), PresenterError> {
    bar.style()
        .set_property("width", &format!("{}%", percent))
        .map_err(dom_err)?;
    bar.set_attribute("aria-valuenow", &percent.to_string())
        .map_err(dom_err)?;
    Ok(())
}

/// Reset the bar to 0% and grow it to `percent` after a short delay, so the
/// transition is visible and never runs backward from a stale width.
/// The delayed write is dropped if a newer render started meanwhile.
pub(super) fn animate_progress(
    document: &Document,
    anchors: &StatusAnchors,
    percent: u8,
    ticket: RequestTicket,
) -> Result<(), PresenterError> {
    let bar = find_html(document, &anchors.progress_bar_id)?;
    set_bar_width(&bar, 0)?;
    bar.set_text_content(Some(&format!("{}%", percent)));

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(PROGRESS_ANIMATION_DELAY_MS).await;
        if !ticket.is_current() {
            log::debug!("progress animation #{} superseded", ticket.id());
            return;
        }
        if let Err(e) = set_bar_width(&bar, percent) {
            log::warn!("progress bar: {}", e);
        }
    });
    Ok(())
}

pub(super) fn reset_progress(
    document: &Document,
    anchors: &StatusAnchors,
) -> Result<(), PresenterError> {
    let bar = find_html(document, &anchors.progress_bar_id)?;
    set_bar_width(&bar, 0)?;
    bar.set_text_content(None);
    Ok(())
}

fn element_with_text(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, PresenterError> {
    let el = document.create_element(tag).map_err(dom_err)?;
    el.set_class_name(class);
    el.set_text_content(Some(text));
    Ok(el)
}

fn timeline_item(document: &Document, entry: &TimelineEntry) -> Result<Element, PresenterError> {
    let item = document.create_element("div").map_err(dom_err)?;
    item.set_class_name(if entry.is_backward() {
        "timeline-item timeline-item--correction"
    } else {
        "timeline-item"
    });

    let transition = element_with_text(
        document,
        "div",
        "timeline-item__transition",
        &format!("{} → {}", entry.from.label, entry.to.label),
    )?;
    item.append_child(&transition).map_err(dom_err)?;

    let when = entry
        .occurred_at
        .as_ref()
        .map(format_local)
        .unwrap_or_else(|| entry.occurred_at_raw.clone());
    let meta = element_with_text(
        document,
        "div",
        "timeline-item__meta",
        &format!("{} • by {}", when, entry.changed_by),
    )?;
    item.append_child(&meta).map_err(dom_err)?;

    if let Some(reason) = &entry.reason {
        let reason_el = element_with_text(document, "div", "timeline-item__reason", reason)?;
        item.append_child(&reason_el).map_err(dom_err)?;
    }

    Ok(item)
}

/// Build every child first and only then hand them to `commit`.
/// A failed build leaves the container's previous content in place.
fn staged<T, E>(
    children: impl IntoIterator<Item = Result<T, E>>,
    commit: impl FnOnce(Vec<T>) -> Result<(), E>,
) -> Result<(), E> {
    let built = children.into_iter().collect::<Result<Vec<_>, _>>()?;
    commit(built)
}

/// Replace the container content with the timeline, newest entry first.
/// Text goes through `textContent`, never HTML.
pub(super) fn apply_timeline(
    document: &Document,
    anchors: &StatusAnchors,
    timeline: &Timeline,
) -> Result<(), PresenterError> {
    let container = find(document, &anchors.timeline_id)?;

    let children: Vec<Result<Element, PresenterError>> = match timeline {
        Timeline::Empty => vec![element_with_text(
            document,
            "p",
            "timeline__empty text-muted",
            EMPTY_TIMELINE_PLACEHOLDER,
        )],
        Timeline::Entries(entries) => entries
            .iter()
            .map(|entry| timeline_item(document, entry))
            .collect(),
    };

    staged(children, |built| {
        container.set_text_content(None);
        for child in &built {
            container.append_child(child).map_err(dom_err)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staged_commits_only_complete_sets() {
        let mut container = vec!["old"];

        let failed = staged(vec![Ok("newest"), Err("no document"), Ok("oldest")], |built| {
            container = built;
            Ok(())
        });
        assert_eq!(failed, Err("no document"));
        assert_eq!(container, vec!["old"]);

        let done = staged(vec![Ok::<_, &str>("newest"), Ok("oldest")], |built| {
            container = built;
            Ok(())
        });
        assert_eq!(done, Ok(()));
        assert_eq!(container, vec!["newest", "oldest"]);
    }
}
