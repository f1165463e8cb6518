use crate::ui::{SelectOption, UiState, Widget};

use std::sync::{Mutex, PoisonError};

/// Everything a [`HeadlessUi`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiSnapshot {
    pub source: Vec<SelectOption>,
    pub destination: Vec<SelectOption>,
    pub message: String,
    pub error_style: bool,
    /// Number of setter calls so far, for detecting late writes.
    pub mutations: u64,
}

impl UiSnapshot {
    pub fn options(&self, widget: Widget) -> &[SelectOption] {
        match widget {
            Widget::Source => &self.source,
            Widget::Destination => &self.destination,
        }
    }
}

/// In-memory [`UiState`] for terminals and tests.
#[derive(Debug, Default)]
pub struct HeadlessUi {
    state: Mutex<UiSnapshot>,
}

impl HeadlessUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> UiSnapshot {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn mutate(&self, apply: impl FnOnce(&mut UiSnapshot)) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut state);
        state.mutations += 1;
    }
}

impl UiState for HeadlessUi {
    fn set_options(&self, widget: Widget, options: Vec<SelectOption>) {
        self.mutate(|state| match widget {
            Widget::Source => state.source = options,
            Widget::Destination => state.destination = options,
        });
    }

    fn set_message(&self, message: &str) {
        self.mutate(|state| state.message = message.to_string());
    }

    fn set_error_style(&self, enabled: bool) {
        self.mutate(|state| state.error_style = enabled);
    }
}
