//! Property tests for fragment parsing and matching.

use proptest::prelude::*;

use hash_router::routing::hash::{Hash, SearchParam};
use hash_router::routing::matcher::{Matcher, TokenMatcher};
use hash_router::routing::{CallbackError, RouteMatch};
use hash_router::Router;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,8}"
}

fn noop(_: &RouteMatch) -> Result<(), CallbackError> {
    Ok(())
}

proptest! {
    #[test]
    fn prop_tokenization_is_idempotent(raw in "[a-z/#]{0,24}") {
        let first = Hash::parse(&raw);
        let reparsed = Hash::parse(&format!("/{}", first.tokens().join("/")));
        prop_assert_eq!(first.tokens(), reparsed.tokens());
    }

    #[test]
    fn prop_tokens_never_empty_or_contain_slash(raw in ".{0,32}") {
        let hash = Hash::parse(&raw);
        for token in hash.tokens() {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains('/'));
            prop_assert!(!token.contains('?'));
        }
    }

    #[test]
    fn prop_search_pairs_preserved(pairs in prop::collection::vec(("[a-z]{1,5}", "[a-z0-9=]{0,5}"), 1..6)) {
        let search: Vec<String> = pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let hash = Hash::parse(&format!("/x?{}", search.join("&")));

        let expected: Vec<SearchParam> = pairs
            .iter()
            .map(|(k, v)| SearchParam::new(k.clone(), v.clone()))
            .collect();
        prop_assert_eq!(hash.search(), expected.as_slice());
    }

    #[test]
    fn prop_length_mismatch_never_matches(
        pattern in prop::collection::vec(segment(), 1..5),
        hash in prop::collection::vec(segment(), 0..7),
    ) {
        prop_assume!(pattern.len() != hash.len());
        let dynamic: Vec<String> = pattern.iter().map(|s| format!("{{{}}}", s)).collect();

        let matcher = TokenMatcher::new(&dynamic.join("/"));
        prop_assert!(!matcher.matches(&Hash::parse(&hash.join("/"))));
    }

    #[test]
    fn prop_static_match_ignores_case(tokens in prop::collection::vec("[a-zA-Z]{1,8}", 1..5)) {
        let pattern = tokens.join("/");
        let matcher = TokenMatcher::new(&pattern);
        prop_assert!(matcher.matches(&Hash::parse(&pattern.to_uppercase())));
        let lowered = format!("#/{}/", pattern.to_lowercase());
        prop_assert!(matcher.matches(&Hash::parse(&lowered)));
    }

    #[test]
    fn prop_dynamic_params_beat_search(value in "[a-z0-9]{1,8}", search in "[a-z0-9]{0,8}") {
        let mut router = Router::new();
        router.route("/items/{id}", noop).unwrap();
        router.start(&format!("/items/{}?id={}", value, search));

        let params = router.current().params.unwrap();
        prop_assert_eq!(&params["id"], &value);
    }
}
