use crate::config::LevelConfig;
use crate::error::CatalogError;
use ahash::AHashSet;
use itertools::Itertools;
use std::fs;
use std::path::Path;
use tracing::debug;

pub mod conversion;
pub mod definition;
pub mod document;

pub use conversion::*;
pub use definition::*;
pub use document::CatalogDocument;

const ROOKIE_DETECTIVE_JSON: &str = include_str!("../../data/rookie_detective.json");

/// An ordered, validated list of cases. Each case's predecessor is the one before it.
///
/// A `Catalog` can only be obtained through [`Catalog::new`] (directly or via a loader),
/// so every instance satisfies: at least one case, unique non-empty identifiers, unique
/// evidence identifiers per case, target flowchart connections that resolve within the
/// case, and a completion ratio in `(0, 1]`.
#[derive(Debug, Clone)]
pub struct Catalog {
    level: LevelConfig,
    cases: Vec<CaseDefinition>,
}

impl Catalog {
    pub fn new(level: LevelConfig, cases: Vec<CaseDefinition>) -> Result<Self, CatalogError> {
        level.validate()?;
        if cases.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        if let Some(position) = cases.iter().position(|c| c.id.trim().is_empty()) {
            return Err(CatalogError::EmptyCaseId { position });
        }
        if let Some(dup) = cases.iter().map(|c| &c.id).duplicates().next() {
            return Err(CatalogError::DuplicateCaseId(dup.clone()));
        }
        for case in &cases {
            Self::check_case(case)?;
        }

        debug!(cases = cases.len(), "catalog validated");
        Ok(Self { level, cases })
    }

    fn check_case(case: &CaseDefinition) -> Result<(), CatalogError> {
        if let Some(dup) = case.evidence.iter().map(|e| &e.id).duplicates().next() {
            return Err(CatalogError::DuplicateEvidenceId {
                case_id: case.id.clone(),
                evidence_id: dup.clone(),
            });
        }

        let node_ids: AHashSet<&str> = case
            .target_flowchart
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        for node in &case.target_flowchart {
            if let Some(target) = node
                .connections
                .iter()
                .find(|t| !node_ids.contains(t.as_str()))
            {
                return Err(CatalogError::DanglingConnection {
                    case_id: case.id.clone(),
                    node_id: node.id.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parses and validates a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        CatalogDocument::from_json(json)?.into_catalog()
    }

    /// Loads a catalog document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The four built-in Rookie Detective cases.
    pub fn rookie() -> Result<Self, CatalogError> {
        Self::from_json(ROOKIE_DETECTIVE_JSON)
    }

    /// Replaces the level policy, re-validating it.
    pub fn with_level(mut self, level: LevelConfig) -> Result<Self, CatalogError> {
        level.validate()?;
        self.level = level;
        Ok(self)
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn cases(&self) -> &[CaseDefinition] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, case_id: &str) -> Option<&CaseDefinition> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    pub fn position(&self, case_id: &str) -> Option<usize> {
        self.cases.iter().position(|c| c.id == case_id)
    }

    /// The case that must be solved before `case_id` unlocks.
    pub fn predecessor_of(&self, case_id: &str) -> Option<&CaseDefinition> {
        match self.position(case_id)? {
            0 => None,
            i => self.cases.get(i - 1),
        }
    }

    /// The case that unlocks once `case_id` is solved.
    pub fn successor_of(&self, case_id: &str) -> Option<&CaseDefinition> {
        self.cases.get(self.position(case_id)? + 1)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.cases.iter().map(|c| c.id.as_str())
    }
}
