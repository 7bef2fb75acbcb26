//! Per-seat knowledge tracking.
//!
//! Each seat owns one `Checklist`. It starts with the seat's own hand marked
//! and grows as suggestions are disproved to that seat.

pub mod sheet;

pub use sheet::{Checklist, ChecklistSection, ChecklistSnapshot};
