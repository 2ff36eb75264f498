//! Filesystem locations for templates, fonts and rendered output.

use std::path::PathBuf;

/// Default directory holding the template rasters.
const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Default directory holding the typeface files.
const DEFAULT_FONTS_DIR: &str = "fonts";

/// Default directory rendered documents are written to.
const DEFAULT_OUTPUT_DIR: &str = "certificates";

/// Where the renderer finds its assets and writes its output.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Directory containing the certificate and marksheet templates.
    pub templates_dir: PathBuf,
    /// Directory containing the typeface files.
    pub fonts_dir: PathBuf,
    /// Directory rendered PNGs are written to (created on demand).
    pub output_dir: PathBuf,
}

impl RenderConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable            | Required | Default        |
    /// |---------------------|----------|----------------|
    /// | `TEMPLATES_DIR`     | no       | `templates`    |
    /// | `FONTS_DIR`         | no       | `fonts`        |
    /// | `RENDER_OUTPUT_DIR` | no       | `certificates` |
    pub fn from_env() -> Self {
        Self {
            templates_dir: dir_var("TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR),
            fonts_dir: dir_var("FONTS_DIR", DEFAULT_FONTS_DIR),
            output_dir: dir_var("RENDER_OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
        }
    }
}

fn dir_var(name: &str, default: &str) -> PathBuf {
    std::env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
