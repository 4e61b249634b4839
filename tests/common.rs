//! Common test utilities for building catalogs, investigations and observers.
use sleuth::prelude::*;

#[allow(dead_code)]
pub const FIRST_CASE: &str = "case-1-missing-lunch";
#[allow(dead_code)]
pub const SECOND_CASE: &str = "case-2-lost-pet";
#[allow(dead_code)]
pub const THIRD_CASE: &str = "case-3-playground-vandal";
#[allow(dead_code)]
pub const FOURTH_CASE: &str = "case-4-library-book-thief";

/// Pseudocode that passes the length and keyword checks.
#[allow(dead_code)]
pub const VALID_PSEUDOCODE: &str = "BEGIN investigation\n  INTERVIEW each witness\n  FOLLOW the crumb trail\nEND investigation";

/// The built-in four-case catalog.
#[allow(dead_code)]
pub fn rookie_catalog() -> Catalog {
    Catalog::rookie().expect("built-in catalog should load")
}

/// A bare case with no evidence, hints or target solution.
#[allow(dead_code)]
pub fn bare_case(id: &str) -> CaseDefinition {
    CaseDefinition {
        id: id.to_string(),
        title: format!("Case {}", id),
        description: String::new(),
        scenario: String::new(),
        evidence: vec![],
        target_flowchart: vec![],
        target_pseudocode: String::new(),
        hints: vec![],
        estimated_minutes: 10,
    }
}

/// A catalog of `n` bare cases named `c0`, `c1`, ...
#[allow(dead_code)]
pub fn numbered_catalog(n: usize) -> Catalog {
    let cases = (0..n).map(|i| bare_case(&format!("c{}", i))).collect();
    Catalog::new(LevelConfig::default(), cases).expect("numbered catalog should be valid")
}

#[allow(dead_code)]
pub fn node(role: NodeRole) -> FlowchartNode {
    FlowchartNode::new(format!("{}-node", role), role, role.default_label())
}

/// Drives an open investigation from briefing all the way to completion.
#[allow(dead_code)]
pub fn solve_open_case<O: SessionObserver>(session: &mut Session<O>) {
    session.advance().expect("briefing -> evidence");
    session.advance().expect("evidence -> flowchart");
    let investigation = session.investigation_mut().expect("case should be open");
    investigation.add_node(NodeRole::Start);
    investigation.add_node(NodeRole::Process);
    investigation.add_node(NodeRole::End);
    session.advance().expect("flowchart -> pseudocode");
    session
        .investigation_mut()
        .expect("case should be open")
        .set_pseudocode(VALID_PSEUDOCODE);
    session.advance().expect("pseudocode -> complete");
}

/// Records every callback it receives.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingObserver {
    pub completed_cases: Vec<String>,
    pub level_completions: usize,
}

impl SessionObserver for RecordingObserver {
    fn on_case_complete(&mut self, case_id: &str) {
        self.completed_cases.push(case_id.to_string());
    }

    fn on_level_complete(&mut self) {
        self.level_completions += 1;
    }
}
