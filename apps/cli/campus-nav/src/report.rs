use nav_core::ui::{UiSnapshot, Widget};

use models::{Campus, CatalogOutcome};

use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Serialize;

/// What a command leaves on the (headless) page, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandReport {
    pub campus: Campus,
    /// Selectable locations, empty when the selectors only hold a placeholder.
    pub locations: Vec<String>,
    /// Result-area text, or the placeholder label when no locations loaded.
    pub message: Option<String>,
    pub is_error: bool,
}

impl CommandReport {
    /// Report for `locations`: the selector contents after a catalog load.
    pub fn for_catalog(campus: Campus, outcome: &CatalogOutcome, snapshot: &UiSnapshot) -> Self {
        let options = snapshot.options(Widget::Source);
        let locations: Vec<String> = options
            .iter()
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone())
            .collect();

        let message = if locations.is_empty() {
            options.first().map(|option| option.label.clone())
        } else {
            None
        };

        Self {
            campus,
            locations,
            message,
            is_error: matches!(outcome, CatalogOutcome::Failed),
        }
    }

    /// Report for `route`: the result area after a path query.
    pub fn for_route(campus: Campus, snapshot: &UiSnapshot) -> Self {
        Self {
            campus,
            locations: Vec::new(),
            message: Some(snapshot.message.clone()),
            is_error: snapshot.error_style,
        }
    }
}

impl Display for CommandReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        for location in &self.locations {
            writeln!(formatter, "{location}")?;
        }
        if let Some(message) = &self.message {
            writeln!(formatter, "{message}")?;
        }
        Ok(())
    }
}
