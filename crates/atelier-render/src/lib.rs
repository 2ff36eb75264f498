//! Raster rendering of student certificates and marksheets.
//!
//! Documents are composed by drawing text onto photographed template
//! stock with [`image`] and [`imageproc`]. Templates and fonts are
//! read from disk on every render so replacing the stock never needs
//! a restart. Rendering is CPU-bound and runs on the blocking pool.

pub mod certificate;
pub mod config;
pub mod error;
pub mod marksheet;
mod text;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use image::{ImageFormat, RgbaImage};

pub use certificate::{CertificateData, CertificateKind};
pub use config::RenderConfig;
pub use error::RenderError;
pub use marksheet::{MarksheetData, SubjectLine};

/// A rendered document, persisted to disk and held in memory for the
/// response body.
#[derive(Debug)]
pub struct RenderedDocument {
    /// Where the PNG was written.
    pub path: PathBuf,
    /// PNG-encoded bytes.
    pub png: Vec<u8>,
}

/// Renders certificates and marksheets from the configured template
/// and font directories.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a certificate for `data`, writing
    /// `<output_dir>/<enrollment_id>.png`.
    pub async fn render_certificate(
        &self,
        kind: CertificateKind,
        data: CertificateData,
    ) -> Result<RenderedDocument, RenderError> {
        let config = self.config.clone();
        run_blocking(move || {
            let template = load_template(&config.templates_dir.join(kind.template_file()))?;
            let font = load_font(&config.fonts_dir.join(certificate::CERTIFICATE_FONT))?;
            let canvas = certificate::compose(template, &font, &data);
            write_output(&config.output_dir, &data.enrollment_id, canvas)
        })
        .await
    }

    /// Render a marksheet for `data`, writing
    /// `<output_dir>/<marksheet_id>.png`.
    pub async fn render_marksheet(&self, data: MarksheetData) -> Result<RenderedDocument, RenderError> {
        let config = self.config.clone();
        run_blocking(move || {
            let template = load_template(&config.templates_dir.join(marksheet::MARKSHEET_TEMPLATE))?;
            let font = load_font(&config.fonts_dir.join(marksheet::MARKSHEET_FONT))?;
            let canvas = marksheet::compose(template, &font, &data);
            write_output(&config.output_dir, &data.marksheet_id.to_string(), canvas)
        })
        .await
    }
}

async fn run_blocking<F>(render: F) -> Result<RenderedDocument, RenderError>
where
    F: FnOnce() -> Result<RenderedDocument, RenderError> + Send + 'static,
{
    tokio::task::spawn_blocking(render)
        .await
        .map_err(|e| RenderError::Task(e.to_string()))?
}

fn load_template(path: &Path) -> Result<RgbaImage, RenderError> {
    let image = image::open(path).map_err(|source| RenderError::Template {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(image.to_rgba8())
}

fn load_font(path: &Path) -> Result<FontVec, RenderError> {
    let bytes = std::fs::read(path).map_err(|_| RenderError::Font {
        path: path.to_path_buf(),
    })?;
    FontVec::try_from_vec(bytes).map_err(|_| RenderError::Font {
        path: path.to_path_buf(),
    })
}

fn write_output(dir: &Path, stem: &str, canvas: RgbaImage) -> Result<RenderedDocument, RenderError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{stem}.png"));

    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    std::fs::write(&path, &png)?;

    tracing::info!(path = %path.display(), "rendered document written");
    Ok(RenderedDocument { path, png })
}
