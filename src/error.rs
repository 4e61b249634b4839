use crate::investigation::Step;
use thiserror::Error;

/// Errors that can occur while loading and validating a case catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParseError(String),

    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Catalog contains no cases")]
    EmptyCatalog,

    #[error("Case at position {position} has an empty identifier")]
    EmptyCaseId { position: usize },

    #[error("Case identifier '{0}' appears more than once in the catalog")]
    DuplicateCaseId(String),

    #[error("Case '{case_id}' names predecessor '{predecessor}', which is not in the catalog")]
    UnknownPredecessor {
        case_id: String,
        predecessor: String,
    },

    #[error(
        "Case '{case_id}' names predecessor '{found}', but the case before it is '{expected}'"
    )]
    PredecessorOutOfOrder {
        case_id: String,
        expected: String,
        found: String,
    },

    #[error("Case '{case_id}' lists evidence '{evidence_id}' more than once")]
    DuplicateEvidenceId {
        case_id: String,
        evidence_id: String,
    },

    #[error(
        "Target flowchart of case '{case_id}' connects node '{node_id}' to unknown node '{target}'"
    )]
    DanglingConnection {
        case_id: String,
        node_id: String,
        target: String,
    },

    #[error("Completion ratio must be in (0, 1], got {0}")]
    InvalidCompletionRatio(f64),
}

/// Rejections returned by the case selection guard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Case '{0}' does not exist in this catalog")]
    UnknownCase(String),

    #[error("Case '{0}' is locked until the previous case is solved")]
    Locked(String),
}

/// Errors raised when a step transition is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StepError {
    #[error("Cannot leave the {0} step until its requirements are met")]
    GateNotSatisfied(Step),

    #[error("The investigation is already complete")]
    AlreadyComplete,
}

/// Errors surfaced by the session controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No case is currently open")]
    NoActiveCase,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Step(#[from] StepError),
}
