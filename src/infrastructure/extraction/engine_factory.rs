use std::sync::Arc;

use crate::application::ports::{ExtractionEngine, TitleResolver};
use crate::application::services::EngineRegistry;

use super::chord_engine::ChordEngine;
use super::lyrics_engine::LyricsEngine;

pub struct EngineFactory;

impl EngineFactory {
    /// Registry with every built-in engine, all sharing one title resolver.
    pub fn builtin(resolver: Arc<dyn TitleResolver>) -> EngineRegistry {
        let engines: Vec<Arc<dyn ExtractionEngine>> = vec![
            Arc::new(LyricsEngine::new(Arc::clone(&resolver))),
            Arc::new(ChordEngine::new(resolver)),
        ];
        EngineRegistry::new(engines)
    }
}
