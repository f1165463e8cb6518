//! The UI capability the loader and orchestrator write to.
//!
//! Neither component touches concrete widgets. They are handed something that
//! implements [`UiState`], which lets the whole lifecycle run headless.

mod headless;

pub use headless::{HeadlessUi, UiSnapshot};

/// The two location selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    Source,
    Destination,
}

impl Widget {
    pub const BOTH: [Widget; 2] = [Widget::Source, Widget::Destination];
}

/// One entry of a selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
            disabled: false,
        }
    }

    /// Disabled entry with an empty value, used for loading/empty/error states.
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// Write-only view of the page: two selectors and one result area.
///
/// Methods take `&self`; implementations handle their own interior mutability
/// so a single handle can be shared between the catalog and query flows.
pub trait UiState: Send + Sync {
    /// Replace every option of `widget`.
    fn set_options(&self, widget: Widget, options: Vec<SelectOption>);

    /// Replace the text of the result area.
    fn set_message(&self, message: &str);

    /// Toggle error styling on the result area.
    fn set_error_style(&self, enabled: bool);
}
