use crate::generation::Generation;

#[test]
fn given_fresh_generation_when_advanced_then_tokens_increase() {
    let generation = Generation::new();

    let first = generation.advance();
    let second = generation.advance();

    assert!(second > first);
    assert_eq!(first.value(), 1);
    assert_eq!(second.value(), 2);
}

/// **VALUE**: Only the most recently issued token is current.
///
/// **WHY THIS MATTERS**: This is the whole stale-response guard. If an older token
/// still reported current, a slow response could overwrite a newer one on screen.
#[test]
fn given_advanced_generation_when_checking_old_token_then_is_stale() {
    let generation = Generation::new();
    let old = generation.advance();
    let new = generation.advance();

    assert!(!generation.is_current(old));
    assert!(generation.is_current(new));
    assert_eq!(generation.current(), new);
}

#[test]
fn given_token_when_displayed_then_prefixed_with_hash() {
    let generation = Generation::new();
    assert_eq!(generation.advance().to_string(), "#1");
}
