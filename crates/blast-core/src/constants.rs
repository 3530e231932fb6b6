// src/constants.rs

/// Tracing target used for every diagnostic the pipeline emits
pub const LOG_TARGET: &str = "fontblaster";

/// Directory-name suffix marking a nested resource bundle
pub const BUNDLE_SUFFIX: &str = ".bundle";

// Extensions are matched case-sensitively: `Font.TTF` is not a candidate.
pub const TRUE_TYPE_EXTENSION: &str = "ttf";
pub const OPEN_TYPE_EXTENSION: &str = "otf";
pub const SUPPORTED_EXTENSIONS: [&str; 2] = [TRUE_TYPE_EXTENSION, OPEN_TYPE_EXTENSION];

/// Leading character of hidden directory entries
pub const HIDDEN_PREFIX: char = '.';

pub const DEFAULT_DEBUG_ENABLED: bool = false;
pub const DEFAULT_INCLUDE_HIDDEN: bool = false;
