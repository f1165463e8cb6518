//! Campus inference from the navigation context.
//!
//! The context is whatever string identifies the current view (a URL, a path,
//! a page name). Resolution never fails: if no campus token appears, the
//! default campus is used.

use models::Campus;

use log::trace;

/// Tokens checked in priority order; the first one found in the context wins.
const RESOLUTION_ORDER: [Campus; 3] = [Campus::Hill, Campus::Outer, Campus::Deemed];

/// Resolve the active campus from a context string.
///
/// Case-insensitive substring match, first hit in [`RESOLUTION_ORDER`] wins.
pub fn resolve(context: &str) -> Campus {
    let haystack = context.to_ascii_lowercase();

    let campus = RESOLUTION_ORDER
        .into_iter()
        .find(|campus| haystack.contains(campus.as_str()))
        .unwrap_or_default();

    trace!("Resolved context {context:?} to campus {campus}");
    campus
}
