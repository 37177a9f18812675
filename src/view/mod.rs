//! Presentation Adapter - maps aggregation output to display-ready shapes.
//!
//! Everything here is a pure mapping consumed by an external rendering or
//! charting collaborator. View models are recomputed on every call and never
//! cached; the stores stay the single owner of state.

/// Chart series for the external charting sink
pub mod charts;
/// Dashboard, transactions-list, and analytics view models
pub mod dashboard;
/// Currency, date, and relative-age formatting
pub mod format;
/// UI state machine, page titles, and transient toasts
pub mod state;
/// Trend indicators for the summary cards
pub mod trend;
