use super::{Catalog, IntoCatalog};
use crate::catalog::definition::*;
use crate::config::LevelConfig;
use crate::error::CatalogError;
use serde::Deserialize;

// --- JSON Deserialization Structs (catalog document format) ---
// Keys are snake_case; the camelCase spellings used by the web front-end are accepted as aliases.

#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub level: LevelConfig,
    pub cases: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
pub struct RawCase {
    pub id: String,
    /// Optional explicit link to the previous case; must agree with catalog order.
    #[serde(default)]
    pub predecessor: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default)]
    pub evidence: Vec<RawEvidence>,
    #[serde(default, alias = "targetFlowchart")]
    pub target_flowchart: Vec<RawNode>,
    #[serde(default, alias = "targetPseudocode")]
    pub target_pseudocode: String,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default, alias = "estimatedDuration")]
    pub estimated_duration: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawEvidence {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EvidenceKind,
    pub description: String,
    pub importance: Importance,
}

#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: String,
    #[serde(rename = "type")]
    pub role: NodeRole,
    #[serde(alias = "label")]
    pub content: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub connections: Vec<String>,
}

impl CatalogDocument {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::JsonParseError(e.to_string()))
    }

    /// Checks every declared predecessor against the case immediately before it.
    fn check_predecessors(&self) -> Result<(), CatalogError> {
        for (index, case) in self.cases.iter().enumerate() {
            let Some(declared) = &case.predecessor else {
                continue;
            };
            if !self.cases.iter().any(|c| &c.id == declared) {
                return Err(CatalogError::UnknownPredecessor {
                    case_id: case.id.clone(),
                    predecessor: declared.clone(),
                });
            }
            let expected = match index {
                0 => "(none)".to_string(),
                _ => self.cases[index - 1].id.clone(),
            };
            if *declared != expected {
                return Err(CatalogError::PredecessorOutOfOrder {
                    case_id: case.id.clone(),
                    expected,
                    found: declared.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<RawEvidence> for Evidence {
    fn from(raw: RawEvidence) -> Self {
        Evidence {
            id: raw.id,
            kind: raw.kind,
            description: raw.description,
            importance: raw.importance,
        }
    }
}

impl From<RawNode> for FlowchartNode {
    fn from(raw: RawNode) -> Self {
        FlowchartNode {
            id: raw.id,
            role: raw.role,
            label: raw.content,
            position: Position { x: raw.x, y: raw.y },
            connections: raw.connections,
        }
    }
}

impl From<RawCase> for CaseDefinition {
    fn from(raw: RawCase) -> Self {
        CaseDefinition {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            scenario: raw.scenario,
            evidence: raw.evidence.into_iter().map(Evidence::from).collect(),
            target_flowchart: raw
                .target_flowchart
                .into_iter()
                .map(FlowchartNode::from)
                .collect(),
            target_pseudocode: raw.target_pseudocode,
            hints: raw.hints,
            estimated_minutes: raw.estimated_duration,
        }
    }
}

impl IntoCatalog for CatalogDocument {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        self.check_predecessors()?;
        let cases = self.cases.into_iter().map(CaseDefinition::from).collect();
        Catalog::new(self.level, cases)
    }
}
