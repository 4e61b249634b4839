use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of a flowchart node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Start,
    Process,
    Decision,
    End,
}

impl NodeRole {
    pub const ALL: [NodeRole; 4] = [
        NodeRole::Start,
        NodeRole::Process,
        NodeRole::Decision,
        NodeRole::End,
    ];

    /// Label given to a freshly added node of this role.
    pub fn default_label(self) -> &'static str {
        match self {
            NodeRole::Start => "Start Investigation",
            NodeRole::Process => "Action Step",
            NodeRole::Decision => "Decision Point?",
            NodeRole::End => "Case Solved!",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "start" => Some(NodeRole::Start),
            "process" => Some(NodeRole::Process),
            "decision" => Some(NodeRole::Decision),
            "end" => Some(NodeRole::End),
            _ => None,
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeRole::Start => "start",
            NodeRole::Process => "process",
            NodeRole::Decision => "decision",
            NodeRole::End => "end",
        };
        write!(f, "{}", name)
    }
}

/// Placement on the drawing canvas. Has no meaning to validation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One box in a flowchart, either authored by the player or part of a reference solution.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowchartNode {
    pub id: String,
    pub role: NodeRole,
    pub label: String,
    pub position: Position,
    /// Identifiers of the nodes this one points to, in order.
    pub connections: Vec<String>,
}

impl FlowchartNode {
    pub fn new(id: impl Into<String>, role: NodeRole, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            label: label.into(),
            position: Position::default(),
            connections: Vec::new(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn connect_to(mut self, target: impl Into<String>) -> Self {
        self.connections.push(target.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Witness,
    Physical,
}

impl fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvidenceKind::Witness => write!(f, "witness"),
            EvidenceKind::Physical => write!(f, "physical"),
        }
    }
}

/// Display rank of a clue. Variants are declared most important first so that
/// the derived ordering sorts high before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Importance::High => write!(f, "high"),
            Importance::Medium => write!(f, "medium"),
            Importance::Low => write!(f, "low"),
        }
    }
}

/// A read-only clue attached to a case.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub id: String,
    pub kind: EvidenceKind,
    pub description: String,
    pub importance: Importance,
}

/// Static content of a single case. Position in the catalog is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub scenario: String,
    pub evidence: Vec<Evidence>,
    /// Reference solution, shown as a hint only.
    pub target_flowchart: Vec<FlowchartNode>,
    /// Reference solution, shown as a hint only.
    pub target_pseudocode: String,
    pub hints: Vec<String>,
    pub estimated_minutes: u32,
}

impl CaseDefinition {
    /// Evidence ordered for display: high importance first, authoring order kept within a rank.
    pub fn evidence_by_importance(&self) -> Vec<&Evidence> {
        self.evidence
            .iter()
            .sorted_by_key(|e| e.importance)
            .collect()
    }

    pub fn target_solution(&self) -> TargetSolution<'_> {
        TargetSolution {
            flowchart: &self.target_flowchart,
            pseudocode: &self.target_pseudocode,
        }
    }
}

/// Borrowed view of a case's reference solution, for showing as a worked example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSolution<'a> {
    pub flowchart: &'a [FlowchartNode],
    pub pseudocode: &'a str,
}

impl<'a> TargetSolution<'a> {
    /// Node labels in authoring order.
    pub fn labels(self) -> impl Iterator<Item = &'a str> {
        self.flowchart.iter().map(|n| n.label.as_str())
    }
}
