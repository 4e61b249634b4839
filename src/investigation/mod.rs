use crate::catalog::{CaseDefinition, FlowchartNode, NodeRole};
use crate::error::StepError;
use crate::validation::{validate_flowchart, validate_pseudocode};
use tracing::debug;

mod flowchart;
mod hints;
mod step;

pub use flowchart::PlayerFlowchart;
pub use hints::HintCursor;
pub use step::Step;

/// One run through a case: the current step plus everything the player has authored.
///
/// An investigation always starts at [`Step::Briefing`] with an empty flowchart and
/// empty pseudocode. It only moves forward. Leaving the case means dropping the value,
/// which discards the authored work with it.
#[derive(Debug, Clone)]
pub struct Investigation {
    case_id: String,
    step: Step,
    flowchart: PlayerFlowchart,
    pseudocode: String,
    hints: HintCursor,
    example_visible: bool,
}

impl Investigation {
    pub fn new(case: &CaseDefinition) -> Self {
        debug!(case_id = %case.id, "investigation opened");
        Self {
            case_id: case.id.clone(),
            step: Step::Briefing,
            flowchart: PlayerFlowchart::new(),
            pseudocode: String::new(),
            hints: HintCursor::new(case.hints.len()),
            example_visible: false,
        }
    }

    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::Completion
    }

    /// Whether the gate on the current step is satisfied.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::Briefing | Step::EvidenceReview => true,
            Step::FlowchartAuthoring => validate_flowchart(self.flowchart.nodes()),
            Step::PseudocodeAuthoring => validate_pseudocode(&self.pseudocode),
            Step::Completion => false,
        }
    }

    /// Moves to the next step. On failure the investigation is left untouched.
    pub fn advance(&mut self) -> Result<Step, StepError> {
        let next = self.step.next().ok_or(StepError::AlreadyComplete)?;
        if !self.can_advance() {
            debug!(case_id = %self.case_id, step = %self.step, "advance refused");
            return Err(StepError::GateNotSatisfied(self.step));
        }
        debug!(case_id = %self.case_id, from = %self.step, to = %next, "advanced");
        self.step = next;
        Ok(next)
    }

    pub fn flowchart(&self) -> &PlayerFlowchart {
        &self.flowchart
    }

    pub fn flowchart_nodes(&self) -> &[FlowchartNode] {
        self.flowchart.nodes()
    }

    pub fn add_node(&mut self, role: NodeRole) -> &FlowchartNode {
        self.flowchart.add(role)
    }

    pub fn push_node(&mut self, node: FlowchartNode) -> &FlowchartNode {
        self.flowchart.push(node)
    }

    pub fn clear_flowchart(&mut self) {
        self.flowchart.clear();
    }

    pub fn is_flowchart_valid(&self) -> bool {
        validate_flowchart(self.flowchart.nodes())
    }

    pub fn pseudocode(&self) -> &str {
        &self.pseudocode
    }

    pub fn set_pseudocode(&mut self, text: impl Into<String>) {
        self.pseudocode = text.into();
    }

    pub fn is_pseudocode_valid(&self) -> bool {
        validate_pseudocode(&self.pseudocode)
    }

    pub fn hints(&self) -> &HintCursor {
        &self.hints
    }

    pub fn hints_mut(&mut self) -> &mut HintCursor {
        &mut self.hints
    }

    /// Shows or hides the case's target solution. Returns the new visibility.
    pub fn toggle_example(&mut self) -> bool {
        self.example_visible = !self.example_visible;
        self.example_visible
    }

    pub fn is_example_visible(&self) -> bool {
        self.example_visible
    }
}
