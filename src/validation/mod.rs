//! Shallow shape checks that gate the two authoring steps.
//!
//! Neither check compares the player's work against a case's reference solution. The
//! flowchart check only looks at which node roles are present, and the pseudocode check
//! only looks at length and the `BEGIN`/`END` keywords. Connectivity, reachability and
//! keyword order are not examined at this difficulty tier.

use crate::catalog::{FlowchartNode, NodeRole};

/// Minimum number of nodes a flowchart must contain.
pub const MIN_FLOWCHART_NODES: usize = 3;

/// Pseudocode must be strictly longer than this many characters.
pub const MIN_PSEUDOCODE_CHARS: usize = 50;

/// Returns `true` when the flowchart has at least three nodes including a start,
/// a process and an end node.
pub fn validate_flowchart(nodes: &[FlowchartNode]) -> bool {
    if nodes.len() < MIN_FLOWCHART_NODES {
        return false;
    }
    let has = |role: NodeRole| nodes.iter().any(|n| n.role == role);
    has(NodeRole::Start) && has(NodeRole::End) && has(NodeRole::Process)
}

/// Returns `true` when the text is longer than 50 characters and contains `BEGIN`
/// and `END`, ignoring case.
pub fn validate_pseudocode(text: &str) -> bool {
    if text.chars().count() <= MIN_PSEUDOCODE_CHARS {
        return false;
    }
    let upper = text.to_uppercase();
    upper.contains("BEGIN") && upper.contains("END")
}

pub fn flowchart_feedback(valid: bool) -> &'static str {
    if valid {
        "Flowchart looks good!"
    } else {
        "Add start, process, and end nodes"
    }
}

pub fn pseudocode_feedback(valid: bool) -> &'static str {
    if valid {
        "Good structure! Make sure your logic matches your flowchart."
    } else {
        "Remember to use BEGIN/END and describe your investigation steps."
    }
}
