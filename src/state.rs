use dashmap::DashMap;

use crate::commands::{EngineConfig, FindSession, HtmlBuffer};

pub struct Document {
    pub buffer: HtmlBuffer,
    pub session: FindSession,
}

pub struct AppState {
    pub documents: DashMap<String, Document>,
    config: EngineConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            documents: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
