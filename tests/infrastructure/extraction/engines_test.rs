use std::sync::Arc;

use songsheet::application::ports::ExtractionEngine;
use songsheet::domain::EngineType;
use songsheet::infrastructure::extraction::{ChordEngine, EngineFactory, LyricsEngine};
use songsheet::infrastructure::llm::LlmTitleResolver;

use crate::helpers::{ScriptedLlmClient, UnreachableTitleResolver, stub_resolver};

#[tokio::test]
async fn given_lyrics_page_when_processing_then_record_has_resolved_title_and_clean_body() {
    let engine = LyricsEngine::new(stub_resolver());
    let raw = "<h1>Lirik Bintang</h1>\n<p>Bintang di surga</p>\n<p>Baca juga: lagu lain</p>";

    let record = engine.process_content(raw).await.unwrap();

    assert_eq!(record.title, "Bintang");
    assert_eq!(record.artist, "Peterpan");
    assert_eq!(record.body, "Lirik Bintang\nBintang di surga");
    assert_eq!(record.original_text, raw);
}

#[tokio::test]
async fn given_empty_page_when_processing_then_placeholder_body_is_used() {
    let engine = ChordEngine::new(stub_resolver());

    let record = engine.process_content("").await.unwrap();

    assert_eq!(record.body, "Chord not found");
    assert_eq!(record.original_text, "");
}

#[tokio::test]
async fn given_unreachable_resolver_when_processing_then_error_names_engine() {
    let engine = LyricsEngine::new(Arc::new(UnreachableTitleResolver));

    let err = engine
        .process_content("<h1>Judul</h1>")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("lyrics processing error:"), "{}", message);
    assert!(message.contains("API Error"), "{}", message);
}

#[tokio::test]
async fn given_llm_resolver_when_processing_then_prompt_carries_title_hint() {
    let client = Arc::new(ScriptedLlmClient::answering(
        "(title:Di Atas Normal,artist:Peterpan)",
    ));
    let engine = ChordEngine::new(Arc::new(LlmTitleResolver::new(client.clone())));

    let record = engine
        .process_content("<h1>Chord Di Atas Normal</h1>\n<pre>[Intro] Am G</pre>")
        .await
        .unwrap();

    assert_eq!(record.title, "Di Atas Normal");
    assert_eq!(record.artist, "Peterpan");
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("(Chord Di Atas Normal)"));
}

fn labels(engine: &dyn ExtractionEngine) -> Vec<&'static str> {
    engine.csv_columns().iter().map(|c| c.label).collect()
}

#[test]
fn given_engines_when_listing_columns_then_body_label_depends_on_engine() {
    let lyrics = LyricsEngine::new(stub_resolver());
    let chord = ChordEngine::new(stub_resolver());

    assert_eq!(
        labels(&lyrics),
        vec!["Judul", "Artis", "Lirik", "Original Text"]
    );
    assert_eq!(
        labels(&chord),
        vec!["Judul", "Artis", "Chord", "Original Text"]
    );
}

#[test]
fn given_builtin_factory_when_resolving_names_then_known_engines_are_found() {
    let registry = EngineFactory::builtin(stub_resolver());

    assert_eq!(
        registry.resolve("lyrics").unwrap().engine_type(),
        EngineType::Lyrics
    );
    assert_eq!(
        registry.resolve("chord").unwrap().engine_type(),
        EngineType::Chord
    );
    assert!(registry.resolve("tabs").is_err());
    assert!(registry.resolve("").is_err());
    assert_eq!(registry.available(), vec![EngineType::Lyrics, EngineType::Chord]);
}
