use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::{Deserialize, Serialize};

/// One of the physical sites served by the routing service.
///
/// Each campus has its own location graph. Campuses are never typed in by the
/// user; they are inferred from the navigation context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Campus {
    #[default]
    Deemed,
    Hill,
    Outer,
}

impl Campus {
    /// Wire name used in `campus=` query parameters.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Campus::Deemed => "deemed",
            Campus::Hill => "hill",
            Campus::Outer => "outer",
        }
    }
}

impl Display for Campus {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.as_str())
    }
}
