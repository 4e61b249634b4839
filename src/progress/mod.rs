use crate::catalog::{CaseDefinition, Catalog};
use crate::config::LevelConfig;
use crate::error::SelectionError;
use ahash::AHashSet;
use std::fmt;

/// Identifiers of the cases solved in the current session.
///
/// The set only grows. It is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    ids: AHashSet<String>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, case_id: &str) -> bool {
        self.ids.contains(case_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// How a case appears on the case board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Solved,
    Available,
    Locked,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Solved => write!(f, "Solved"),
            CaseStatus::Available => write!(f, "Available"),
            CaseStatus::Locked => write!(f, "Locked"),
        }
    }
}

/// A case definition together with its derived progression flags.
#[derive(Debug, Clone, Copy)]
pub struct CaseViewState<'a> {
    pub definition: &'a CaseDefinition,
    pub position: usize,
    pub unlocked: bool,
    pub completed: bool,
}

impl CaseViewState<'_> {
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn status(&self) -> CaseStatus {
        if self.completed {
            CaseStatus::Solved
        } else if self.unlocked {
            CaseStatus::Available
        } else {
            CaseStatus::Locked
        }
    }
}

/// Computes unlock and completion flags for every case.
///
/// Position 0 is always unlocked; position `i` is unlocked iff the case at `i - 1` is in
/// `completed`. The result depends only on catalog order and the set.
pub fn derive_case_states<'a>(
    catalog: &'a Catalog,
    completed: &CompletionSet,
) -> Vec<CaseViewState<'a>> {
    let cases = catalog.cases();
    cases
        .iter()
        .enumerate()
        .map(|(position, definition)| CaseViewState {
            definition,
            position,
            unlocked: position == 0 || completed.contains(&cases[position - 1].id),
            completed: completed.contains(&definition.id),
        })
        .collect()
}

/// Admits a case only if it exists and is unlocked.
pub fn select_case<'s, 'a>(
    case_id: &str,
    states: &'s [CaseViewState<'a>],
) -> Result<&'s CaseViewState<'a>, SelectionError> {
    let state = states
        .iter()
        .find(|s| s.id() == case_id)
        .ok_or_else(|| SelectionError::UnknownCase(case_id.to_string()))?;
    if !state.unlocked {
        return Err(SelectionError::Locked(case_id.to_string()));
    }
    Ok(state)
}

/// Returns a copy of `completed` with `case_id` added. Adding an id twice has no further effect.
pub fn record_completion(completed: &CompletionSet, case_id: &str) -> CompletionSet {
    let mut next = completed.clone();
    next.ids.insert(case_id.to_string());
    next
}

/// Slack for products like `100.0 * 0.07` that land just above a whole number.
const RATIO_EPSILON: f64 = 1e-9;

/// Number of solved cases needed for the level to count as complete.
pub fn required_completions(total: usize, ratio: f64) -> usize {
    (total as f64 * ratio - RATIO_EPSILON).ceil().max(0.0) as usize
}

/// True once at least `ceil(ratio * |catalog|)` catalog cases are in `completed`.
/// Identifiers that are not part of the catalog are ignored.
pub fn is_level_complete(catalog: &Catalog, completed: &CompletionSet, level: &LevelConfig) -> bool {
    let solved = catalog.ids().filter(|id| completed.contains(id)).count();
    solved >= required_completions(catalog.len(), level.completion_ratio)
}

/// Counts shown in the board header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub total: usize,
    pub required: usize,
}

impl ProgressSummary {
    pub fn new(catalog: &Catalog, completed: &CompletionSet) -> Self {
        Self {
            completed: catalog.ids().filter(|id| completed.contains(id)).count(),
            total: catalog.len(),
            required: required_completions(catalog.len(), catalog.level().completion_ratio),
        }
    }
}

impl fmt::Display for ProgressSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} completed", self.completed, self.total)
    }
}
