use crate::catalog::{FlowchartNode, NodeRole, Position};

const ORIGIN_X: f64 = 50.0;
const ORIGIN_Y: f64 = 50.0;
const ROW_SPACING: f64 = 100.0;

/// The flowchart a player is building for the open case.
///
/// Nodes are appended in the order they are added. Generated identifiers are unique for the
/// lifetime of the builder, including across `clear`.
#[derive(Debug, Clone, Default)]
pub struct PlayerFlowchart {
    nodes: Vec<FlowchartNode>,
    next_id: u32,
}

impl PlayerFlowchart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node with the role's default label, stacked below the previous node.
    pub fn add(&mut self, role: NodeRole) -> &FlowchartNode {
        let id = format!("node-{}", self.next_id);
        self.next_id += 1;
        let row = self.nodes.len() as f64;
        let node = FlowchartNode {
            id,
            role,
            label: role.default_label().to_string(),
            position: Position {
                x: ORIGIN_X,
                y: ORIGIN_Y + row * ROW_SPACING,
            },
            connections: Vec::new(),
        };
        self.push(node)
    }

    /// Appends a node built by the caller as-is.
    pub fn push(&mut self, node: FlowchartNode) -> &FlowchartNode {
        self.nodes.push(node);
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[FlowchartNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
