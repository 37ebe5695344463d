use std::sync::Arc;

use songsheet::application::ports::{ResolutionError, TitleResolver};
use songsheet::domain::ResolvedTitle;
use songsheet::infrastructure::llm::{LlmTitleResolver, build_prompt, parse_title_artist};

use crate::helpers::ScriptedLlmClient;

#[test]
fn given_well_formed_answer_when_parsing_then_returns_title_and_artist() {
    let resolved = parse_title_artist("(title:Bintang di Surga,artist:Peterpan)");
    assert_eq!(resolved, ResolvedTitle::new("Bintang di Surga", "Peterpan"));
}

#[test]
fn given_spaced_answer_with_preamble_when_parsing_then_fields_are_trimmed() {
    let resolved = parse_title_artist("Here you go: (title: Separuh Aku , artist: NOAH)\n");
    assert_eq!(resolved, ResolvedTitle::new("Separuh Aku", "NOAH"));
}

#[test]
fn given_unexpected_answer_when_parsing_then_both_fields_are_unknown() {
    for answer in ["", "I don't know", "title: X, artist: Y", "(title:X)"] {
        assert_eq!(parse_title_artist(answer), ResolvedTitle::unknown(), "{}", answer);
    }
}

#[test]
fn given_hint_when_building_prompt_then_hint_is_wrapped_in_parentheses() {
    let prompt = build_prompt("Lirik Lagu Bintang");

    assert!(prompt.starts_with("Extract the song title and artist"));
    assert!(prompt.contains("(Lirik Lagu Bintang)"));
    assert!(prompt.contains("(title:title,artist:artist)"));
}

#[tokio::test]
async fn given_scripted_client_when_resolving_then_answer_is_parsed() {
    let client = Arc::new(ScriptedLlmClient::answering(
        "(title:Kangen,artist:Dewa 19)",
    ));
    let resolver = LlmTitleResolver::new(client.clone());

    let resolved = resolver.resolve("Kunci Gitar Kangen").await.unwrap();

    assert_eq!(resolved, ResolvedTitle::new("Kangen", "Dewa 19"));
    assert_eq!(client.prompts(), vec![build_prompt("Kunci Gitar Kangen")]);
}

#[tokio::test]
async fn given_empty_answer_when_resolving_then_resolves_to_unknown() {
    let resolver = LlmTitleResolver::new(Arc::new(ScriptedLlmClient::answering("")));

    let resolved = resolver.resolve("anything").await.unwrap();

    assert_eq!(resolved, ResolvedTitle::unknown());
}

#[tokio::test]
async fn given_failing_client_when_resolving_then_returns_api_error() {
    let resolver = LlmTitleResolver::new(Arc::new(ScriptedLlmClient::rate_limited()));

    let err = resolver.resolve("anything").await.unwrap_err();

    assert!(matches!(err, ResolutionError::Upstream(_)));
    assert_eq!(err.to_string(), "API Error: rate limited");
}
