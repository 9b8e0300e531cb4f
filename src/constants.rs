//! Common constants used throughout pagegen.

/// Supported manifest file names, looked up in the output root
pub const CONFIG_FILES: [&str; 3] = ["pagegen.json", "pagegen.yml", "pagegen.yaml"];

/// Output directory of the admin set, relative to the output root
pub const ADMIN_DIR: &str = "src/admin";

/// Output directory of the public set, relative to the output root
pub const PUBLIC_DIR: &str = "src/pages";

/// File extension of generated admin components
pub const ADMIN_EXTENSION: &str = "jsx";
