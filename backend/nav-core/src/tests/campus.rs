// Unit tests for campus resolution.
// Resolution is pure, so everything here is a plain #[test].

use crate::campus::resolve;

use models::Campus;

/// **VALUE**: Each known campus token resolves regardless of case or surrounding text.
///
/// **WHY THIS MATTERS**: The context is usually a URL such as `/nav/Hill-Campus.html`.
/// If matching were case-sensitive or anchored, users on those pages would silently
/// get the default campus and see the wrong locations.
#[test]
fn given_context_with_campus_token_when_resolved_then_returns_that_campus() {
    // GIVEN: Contexts that embed a campus token in various shapes
    let cases = [
        ("http://localhost:8080/hill.html", Campus::Hill),
        ("/campus/HILL/index", Campus::Hill),
        ("OuterCampusNavigation", Campus::Outer),
        ("https://nav.example/outer?x=1", Campus::Outer),
        ("/Deemed-University/map", Campus::Deemed),
        ("deemed", Campus::Deemed),
    ];

    for (context, expected) in cases {
        // WHEN: Resolving
        let campus = resolve(context);

        // THEN: The embedded campus wins
        assert_eq!(campus, expected, "context {context:?}");
    }
}

#[test]
fn given_context_without_token_when_resolved_then_returns_default() {
    assert_eq!(resolve(""), Campus::Deemed);
    assert_eq!(resolve("http://localhost:8080/index.html"), Campus::Deemed);
    assert_eq!(resolve("hil outr"), Campus::Deemed);
}

/// **VALUE**: When several tokens appear, the fixed priority order decides.
///
/// **BUG THIS CATCHES**: Would catch if resolution started depending on where a token
/// appears in the string instead of the priority order, making it non-deterministic
/// across URL layouts.
#[test]
fn given_context_with_multiple_tokens_when_resolved_then_priority_order_wins() {
    assert_eq!(resolve("/deemed/links/hill"), Campus::Hill);
    assert_eq!(resolve("/outer/from-deemed"), Campus::Outer);
    assert_eq!(resolve("outer-hill"), Campus::Hill);
}

#[test]
fn given_same_context_when_resolved_twice_then_result_is_stable() {
    let context = "/Outer/route";
    assert_eq!(resolve(context), resolve(context));
}
