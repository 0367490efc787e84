use std::{cell::Cell, rc::Rc};

/// Shared flag flipped when the owning component is disposed. Work that
/// resolves after cancellation must drop its result.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
