pub mod defaults;
pub mod paths;
pub mod service;
pub mod settings;
pub mod validation;

pub use service::ConfigService;
pub use settings::{
    CategoryPattern, ContextSettings, FetchSettings, IndexSettings, LoggingSettings, RagSettings,
    UrlScorerSettings,
};
