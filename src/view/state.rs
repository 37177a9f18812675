//! UI state machine - explicit page and modal state, plus transient toasts.
//!
//! The renderer holds exactly one [`UiState`] at a time; there are no
//! scattered "is open" flags. Modal state is a tagged variant so the delete
//! confirmation carries the id it would delete.

use std::time::Duration;

/// How long a toast stays on screen. Purely presentational.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Modal dialogs, tagged with the data they operate on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Confirm deletion of one transaction
    ConfirmDelete {
        /// Id of the transaction the confirm button would delete
        transaction_id: String,
    },
}

/// The single active page or modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    /// Summary cards and recent transactions
    #[default]
    Dashboard,
    /// Income entry form
    AddIncome,
    /// Expense entry form
    AddExpense,
    /// Savings progress, insights, and charts
    Analytics,
    /// Full filterable transaction list
    Transactions,
    /// A modal over the transactions list
    Modal(ModalKind),
}

impl UiState {
    /// Header title for the state.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AddIncome => "Add Income",
            Self::AddExpense => "Add Expense",
            Self::Analytics => "Analytics",
            // Modals only open from the transactions list
            Self::Transactions | Self::Modal(_) => "Transactions",
        }
    }
}

/// Toast severities, mapped to styling by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation succeeded
    Success,
    /// Operation was rejected
    Error,
    /// Neutral information
    Info,
}

/// A transient toast notification. Dismissal after [`TOAST_DURATION`] is the
/// renderer's job; nothing here is a correctness mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Message text
    pub message: String,
    /// Severity
    pub kind: ToastKind,
}

impl Toast {
    /// Success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    /// Error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    /// Info toast.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Info,
        }
    }
}
