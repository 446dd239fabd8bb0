use super::action::Action;

/// Last-in, first-out record of successful mutations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionLog {
    entries: Vec<Action>,
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, action: Action) {
        self.entries.push(action);
    }

    pub fn pop(&mut self) -> Option<Action> {
        self.entries.pop()
    }

    pub fn last(&self) -> Option<&Action> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first.
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }
}
