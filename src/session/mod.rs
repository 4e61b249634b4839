use crate::catalog::{CaseDefinition, Catalog, TargetSolution};
use crate::error::SessionError;
use crate::investigation::{Investigation, Step};
use crate::progress::{
    self, CaseViewState, CompletionSet, ProgressSummary, derive_case_states, record_completion,
};
use std::time::Instant;
use tracing::{debug, info, warn};

mod observer;
mod timer;

pub use observer::SessionObserver;
pub use timer::PendingCompletion;

/// Owns all mutable state of one play session.
///
/// The session holds the completion set, the investigation currently open (if any) and
/// the pending completion timer. Every mutation goes through `&mut self`, driven by player
/// actions or by [`Session::poll`].
///
/// Reaching [`Step::Completion`] does not record the case immediately. The completion is
/// scheduled `completion_delay_ms` later and delivered by `poll` (or `flush`). Selecting
/// another case, abandoning the case or dropping the session cancels it.
#[derive(Debug)]
pub struct Session<O: SessionObserver = ()> {
    catalog: Catalog,
    completed: CompletionSet,
    active: Option<Investigation>,
    pending: Option<PendingCompletion>,
    level_announced: bool,
    observer: O,
}

impl Session<()> {
    /// A session that reports to nobody.
    pub fn detached(catalog: Catalog) -> Self {
        Self::new(catalog, ())
    }
}

impl<O: SessionObserver> Session<O> {
    pub fn new(catalog: Catalog, observer: O) -> Self {
        Self {
            catalog,
            completed: CompletionSet::new(),
            active: None,
            pending: None,
            level_announced: false,
            observer,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn case_states(&self) -> Vec<CaseViewState<'_>> {
        derive_case_states(&self.catalog, &self.completed)
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::new(&self.catalog, &self.completed)
    }

    pub fn is_level_complete(&self) -> bool {
        progress::is_level_complete(&self.catalog, &self.completed, self.catalog.level())
    }

    /// Opens an unlocked case with a fresh investigation.
    ///
    /// Any open investigation is discarded and any pending completion is cancelled, even
    /// when the same case is selected again. A rejected selection changes nothing.
    pub fn select_case(&mut self, case_id: &str) -> Result<&Investigation, SessionError> {
        let states = derive_case_states(&self.catalog, &self.completed);
        let state = progress::select_case(case_id, &states).inspect_err(|e| {
            warn!(case_id, error = %e, "case selection rejected");
        })?;
        let investigation = Investigation::new(state.definition);

        self.cancel_pending();
        Ok(&*self.active.insert(investigation))
    }

    /// Returns to the case board, discarding the open investigation and its authored work.
    pub fn abandon(&mut self) -> Option<Investigation> {
        self.cancel_pending();
        let abandoned = self.active.take();
        if let Some(investigation) = &abandoned {
            debug!(
                case_id = investigation.case_id(),
                step = %investigation.step(),
                "investigation abandoned"
            );
        }
        abandoned
    }

    pub fn active(&self) -> Option<&Investigation> {
        self.active.as_ref()
    }

    pub fn investigation_mut(&mut self) -> Result<&mut Investigation, SessionError> {
        self.active.as_mut().ok_or(SessionError::NoActiveCase)
    }

    pub fn current_case(&self) -> Option<&CaseDefinition> {
        self.active
            .as_ref()
            .and_then(|inv| self.catalog.get(inv.case_id()))
    }

    /// Text of the hint the cursor points at, if the open case has any hints.
    pub fn current_hint(&self) -> Option<&str> {
        let investigation = self.active.as_ref()?;
        let case = self.catalog.get(investigation.case_id())?;
        case.hints
            .get(investigation.hints().index())
            .map(String::as_str)
    }

    /// The open case's reference solution, while its example is toggled on.
    pub fn target_solution(&self) -> Option<TargetSolution<'_>> {
        let investigation = self.active.as_ref().filter(|i| i.is_example_visible())?;
        self.catalog
            .get(investigation.case_id())
            .map(CaseDefinition::target_solution)
    }

    /// Advances the open investigation, using the system clock for any completion delay.
    pub fn advance(&mut self) -> Result<Step, SessionError> {
        self.advance_at(Instant::now())
    }

    /// Advances the open investigation. Entering `Completion` schedules the completion
    /// relative to `now`.
    pub fn advance_at(&mut self, now: Instant) -> Result<Step, SessionError> {
        let investigation = self.active.as_mut().ok_or(SessionError::NoActiveCase)?;
        let step = investigation.advance()?;
        if step == Step::Completion {
            let pending = PendingCompletion::new(
                investigation.case_id(),
                now,
                self.catalog.level().completion_delay(),
            );
            debug!(case_id = pending.case_id(), "completion scheduled");
            self.pending = Some(pending);
        }
        Ok(step)
    }

    pub fn pending(&self) -> Option<&PendingCompletion> {
        self.pending.as_ref()
    }

    /// Delivers the pending completion if its delay has elapsed at `now`.
    /// Returns the id of the case that was completed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if !self.pending.as_ref()?.is_due(now) {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.deliver(pending))
    }

    pub fn poll_now(&mut self) -> Option<String> {
        self.poll(Instant::now())
    }

    /// Delivers the pending completion without waiting for its delay.
    pub fn flush(&mut self) -> Option<String> {
        let pending = self.pending.take()?;
        Some(self.deliver(pending))
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(case_id = pending.case_id(), "pending completion cancelled");
        }
    }

    fn deliver(&mut self, pending: PendingCompletion) -> String {
        let case_id = pending.case_id().to_string();
        self.completed = record_completion(&self.completed, &case_id);
        if self
            .active
            .as_ref()
            .is_some_and(|inv| inv.case_id() == case_id)
        {
            self.active = None;
        }

        info!(case_id = %case_id, progress = %self.summary(), "case completed");
        self.observer.on_case_complete(&case_id);

        if !self.level_announced && self.is_level_complete() {
            self.level_announced = true;
            info!("level completed");
            self.observer.on_level_complete();
        }
        case_id
    }
}
