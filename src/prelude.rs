//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types, traits and functions of the
//! sleuth crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use sleuth::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let catalog = Catalog::from_file("path/to/catalog.json")?;
//! let states = derive_case_states(&catalog, &CompletionSet::new());
//! for state in &states {
//!     println!("{} - {}", state.definition.title, state.status());
//! }
//! # Ok(())
//! # }
//! ```

// Content
pub use crate::catalog::{
    CaseDefinition, Catalog, CatalogDocument, Evidence, EvidenceKind, FlowchartNode, Importance,
    IntoCatalog, NodeRole, Position, TargetSolution,
};
pub use crate::config::LevelConfig;

// Progression
pub use crate::progress::{
    CaseStatus, CaseViewState, CompletionSet, ProgressSummary, derive_case_states,
    is_level_complete, record_completion, select_case,
};

// Investigation and validation
pub use crate::investigation::{HintCursor, Investigation, PlayerFlowchart, Step};
pub use crate::validation::{validate_flowchart, validate_pseudocode};

// Session
pub use crate::session::{PendingCompletion, Session, SessionObserver};

// Error types
pub use crate::error::{CatalogError, SelectionError, SessionError, StepError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
