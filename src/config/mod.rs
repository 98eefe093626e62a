mod manager;
mod settings;

pub use manager::{
    CacheConfig, ConfigFile, ConfigManager, ResolveOptions, TranslationsConfig, resolve_settings,
};
pub use settings::{DEFAULT_ALLOW_SHOW_KEYS, DEFAULT_EXTENSION, DEFAULT_TRANSLATIONS_DIR, Settings};
