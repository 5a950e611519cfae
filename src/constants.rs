//! Global constants for the vocab application

/// Directory under the platform config dir holding vocab settings
pub const APP_DIR: &str = "vocab";

/// Config file name inside [`APP_DIR`]
pub const CONFIG_FILENAME: &str = "vocab-config.json";

/// Default store file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "vocabulary.json";

/// Prefix for generated export file names (`vocabulary_<millis>.pdf`)
pub const DEFAULT_EXPORT_PREFIX: &str = "vocabulary";
