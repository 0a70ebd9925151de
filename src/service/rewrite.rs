//! Rewrite service for pointing a compose manifest at published images
//!
//! Reads the manifest, rewrites it in memory and replaces the output file in a
//! single step so a failed run never leaves a partial manifest behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{
    compose::{emit_manifest, parse_manifest, rewrite_document},
    target::ImageTarget,
};

/// Configuration for a rewrite operation
pub struct RewriteConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub target: ImageTarget,
    pub dry_run: bool,
}

/// Result of a rewrite operation
pub struct RewriteResult {
    /// Path that was written, `None` for dry runs
    pub written: Option<PathBuf>,
    pub services: Vec<String>,
    pub document: String,
}

/// Service for rewriting compose manifests
pub struct RewriteService;

impl RewriteService {
    pub fn run(config: RewriteConfig) -> Result<RewriteResult> {
        debug!("Reading manifest from {}", config.input.display());
        let content = fs::read_to_string(&config.input)
            .with_context(|| format!("Failed to read manifest: {}", config.input.display()))?;

        let doc = parse_manifest(&content)
            .with_context(|| format!("Invalid manifest: {}", config.input.display()))?;
        let rewrite = rewrite_document(doc, &config.target)
            .with_context(|| format!("Failed to rewrite manifest: {}", config.input.display()))?;
        let document = emit_manifest(&rewrite.document)?;

        if rewrite.services.is_empty() {
            info!("No published services found, manifest is only re-serialized");
        }

        let written = if config.dry_run {
            info!("Skipping write (--dry-run specified)");
            None
        } else {
            Self::write_atomic(&config.output, &document)?;
            debug!("Wrote manifest to {}", config.output.display());
            Some(config.output)
        };

        Ok(RewriteResult {
            written,
            services: rewrite.services,
            document,
        })
    }

    /// Replace `path` with `content` via a temp file in the same directory
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .context("Failed to write temporary manifest")?;

        // Temp files are created owner-only; keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(metadata.permissions())
                .context("Failed to copy manifest permissions")?;
        }

        tmp.persist(path)
            .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
        Ok(())
    }
}
