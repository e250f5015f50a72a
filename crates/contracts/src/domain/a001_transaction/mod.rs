//! Laundry transaction: wire DTOs and the browser-independent status logic
//! (normalization, pipeline position, badge labels, history timeline).

pub mod aggregate;
pub mod badge;
pub mod pipeline;
pub mod presentation;
pub mod request;
pub mod status;
pub mod timeline;

pub use aggregate::{
    OrderSnapshot, StatusHistoryDto, TrackingDto, TransactionDetailDto, TransactionItemDto,
    TransactionListPage,
};
pub use badge::{badge_for_raw, BadgeSpec};
pub use pipeline::{step_states, PipelineView, StepState, StepView, PROGRESS_BREAKPOINTS};
pub use presentation::StatusPresentation;
pub use request::{
    CreateTransactionItemRequest, CreateTransactionRequest, CreatedTransactionDto,
    TransactionListQuery, UpdateStatusRequest, UpdateTransactionRequest,
};
pub use status::{OrderStatus, StatusError};
pub use timeline::{build_timeline, StatusTransition, Timeline, TimelineEntry, EMPTY_TIMELINE_PLACEHOLDER};
