mod chord_engine;
mod engine_factory;
mod lyrics_engine;
pub mod text_cleaner;

pub use chord_engine::ChordEngine;
pub use engine_factory::EngineFactory;
pub use lyrics_engine::LyricsEngine;
