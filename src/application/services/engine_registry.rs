use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::ExtractionEngine;
use crate::domain::EngineType;

#[derive(Debug, thiserror::Error)]
#[error("Unknown engine type: {0}")]
pub struct UnknownEngine(pub String);

/// Named extraction engines, looked up by the `engineType` a client sends.
pub struct EngineRegistry {
    engines: HashMap<EngineType, Arc<dyn ExtractionEngine>>,
}

impl EngineRegistry {
    pub fn new(engines: Vec<Arc<dyn ExtractionEngine>>) -> Self {
        Self {
            engines: engines
                .into_iter()
                .map(|engine| (engine.engine_type(), engine))
                .collect(),
        }
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn ExtractionEngine>, UnknownEngine> {
        let engine_type = name
            .parse::<EngineType>()
            .map_err(|_| UnknownEngine(name.to_string()))?;
        self.get(engine_type)
    }

    pub fn get(&self, engine_type: EngineType) -> Result<Arc<dyn ExtractionEngine>, UnknownEngine> {
        self.engines
            .get(&engine_type)
            .cloned()
            .ok_or_else(|| UnknownEngine(engine_type.to_string()))
    }

    pub fn available(&self) -> Vec<EngineType> {
        let mut types: Vec<EngineType> = self.engines.keys().copied().collect();
        types.sort();
        types
    }
}
