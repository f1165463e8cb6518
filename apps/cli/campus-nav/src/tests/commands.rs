use crate::commands::algorithm_token;

#[test]
fn given_explicit_algorithm_when_resolved_then_it_wins_over_default() {
    assert_eq!(algorithm_token(Some("dijkstra"), "bfs"), "dijkstra");
    assert_eq!(algorithm_token(None, "bfs"), "bfs");
}

/// **VALUE**: Unknown algorithm tokens reach the routing service untouched.
///
/// **WHY THIS MATTERS**: The service may support algorithms this client has never
/// heard of. Rewriting or rejecting the token would make them unreachable.
///
/// **BUG THIS CATCHES**: Would catch the token being normalised (case, whitespace)
/// or replaced by the default when it fails to parse.
#[test]
fn given_unknown_algorithm_when_resolved_then_forwarded_as_typed() {
    assert_eq!(algorithm_token(Some("A-Star"), "bfs"), "A-Star");
    assert_eq!(algorithm_token(Some("DIJKSTRA"), "bfs"), "DIJKSTRA");
    assert_eq!(algorithm_token(Some(""), "bfs"), "");
}
