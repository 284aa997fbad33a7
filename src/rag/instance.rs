//! Process-wide engine for hosts that want a single shared index.

use std::sync::{Arc, OnceLock};

use tokio::sync::Mutex;

use super::engine::RagEngine;
use crate::core::config::RagSettings;
use crate::core::errors::RagError;

pub type SharedRagEngine = Arc<Mutex<RagEngine>>;

static INSTANCE: OnceLock<SharedRagEngine> = OnceLock::new();

/// The shared engine, created from default settings on first access.
pub fn get_instance() -> SharedRagEngine {
    INSTANCE
        .get_or_init(|| Arc::new(Mutex::new(RagEngine::with_defaults())))
        .clone()
}

/// Creates the shared engine from `settings`.
///
/// If it already exists the settings are ignored and the existing engine is
/// returned.
pub fn init_instance(settings: RagSettings) -> Result<SharedRagEngine, RagError> {
    if let Some(existing) = INSTANCE.get() {
        tracing::warn!("Shared RAG engine already initialized; ignoring new settings");
        return Ok(existing.clone());
    }

    let engine = Arc::new(Mutex::new(RagEngine::new(settings)?));
    Ok(INSTANCE.get_or_init(|| engine).clone())
}

/// Clears the shared engine's index, if it has been created.
pub async fn reset_instance() {
    if let Some(engine) = INSTANCE.get() {
        engine.lock().await.reset();
    }
}
