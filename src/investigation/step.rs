use std::fmt;

/// The five stages of an investigation, in the only order they can be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Briefing,
    EvidenceReview,
    FlowchartAuthoring,
    PseudocodeAuthoring,
    Completion,
}

impl Step {
    pub const SEQUENCE: [Step; 5] = [
        Step::Briefing,
        Step::EvidenceReview,
        Step::FlowchartAuthoring,
        Step::PseudocodeAuthoring,
        Step::Completion,
    ];

    /// The step that follows this one, `None` for `Completion`.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Briefing => Some(Step::EvidenceReview),
            Step::EvidenceReview => Some(Step::FlowchartAuthoring),
            Step::FlowchartAuthoring => Some(Step::PseudocodeAuthoring),
            Step::PseudocodeAuthoring => Some(Step::Completion),
            Step::Completion => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Short name shown in the step indicator.
    pub fn label(self) -> &'static str {
        match self {
            Step::Briefing => "briefing",
            Step::EvidenceReview => "evidence",
            Step::FlowchartAuthoring => "flowchart",
            Step::PseudocodeAuthoring => "pseudocode",
            Step::Completion => "complete",
        }
    }

    /// Caption of the button that leaves this step.
    pub fn action_label(self) -> Option<&'static str> {
        match self {
            Step::Briefing | Step::EvidenceReview | Step::FlowchartAuthoring => Some("Continue"),
            Step::PseudocodeAuthoring => Some("Submit Solution"),
            Step::Completion => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
