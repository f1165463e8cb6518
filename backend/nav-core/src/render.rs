//! Rendering of query outcomes into the result area.

use crate::ui::UiState;

use models::QueryOutcome;

pub const PATH_PREFIX: &str = "Path: ";
pub const PATH_SEPARATOR: &str = " → ";
pub const NO_PATH_MESSAGE: &str = "No path found.";
pub const ERROR_PREFIX: &str = "Error: ";

/// Text and styling for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub is_error: bool,
}

/// Pure mapping from outcome to display. `None` means leave the text alone.
pub fn render_text(outcome: &QueryOutcome) -> Option<Rendered> {
    let text = match outcome {
        QueryOutcome::Path(locations) => {
            let names: Vec<&str> = locations.iter().map(|l| l.as_str()).collect();
            format!("{PATH_PREFIX}{}", names.join(PATH_SEPARATOR))
        }
        QueryOutcome::EmptyResult => NO_PATH_MESSAGE.to_string(),
        QueryOutcome::TransportError(message) | QueryOutcome::ApplicationError(message) => {
            format!("{ERROR_PREFIX}{message}")
        }
        QueryOutcome::Invalid(reason) => reason.to_string(),
        QueryOutcome::Cancelled => return None,
    };

    Some(Rendered {
        text,
        is_error: outcome.is_error(),
    })
}

/// Write `outcome` to the result area.
///
/// `Cancelled` only clears error styling left over from the previous attempt.
pub fn render<U: UiState + ?Sized>(outcome: &QueryOutcome, ui: &U) {
    match render_text(outcome) {
        Some(rendered) => {
            ui.set_message(&rendered.text);
            ui.set_error_style(rendered.is_error);
        }
        None => ui.set_error_style(false),
    }
}
