/// Which hint is showing, and whether the hint panel is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintCursor {
    index: usize,
    count: usize,
    visible: bool,
}

impl HintCursor {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            visible: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Moves forward, stopping at the last hint.
    pub fn next_hint(&mut self) -> usize {
        if self.index + 1 < self.count {
            self.index += 1;
        }
        self.index
    }

    /// Moves back, stopping at the first hint.
    pub fn previous_hint(&mut self) -> usize {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.count
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }
}
