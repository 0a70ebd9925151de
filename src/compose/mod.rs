use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

use crate::constants::compose::{BUILD_KEY, IMAGE_KEY, PUBLISHED_SERVICES, SERVICES_KEY};
use crate::target::ImageTarget;

mod loader;

/// Structural problems with a compose manifest.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("Manifest is not a YAML mapping")]
    NotAMapping,

    #[error("Manifest contains {0} YAML documents, expected one")]
    MultipleDocuments(usize),

    #[error("'services' is not a mapping")]
    ServicesNotAMapping,

    #[error("Service '{0}' is not a mapping")]
    ServiceNotAMapping(String),
}

/// A rewritten manifest and the services that were pointed at published images
#[derive(Debug)]
pub struct Rewrite {
    pub document: Yaml,
    pub services: Vec<String>,
}

fn key(name: &str) -> Yaml {
    Yaml::String(name.to_string())
}

/// Parse a manifest holding exactly one YAML document
pub fn parse_manifest(content: &str) -> Result<Yaml> {
    let mut docs = loader::load_documents(content)?;

    match docs.len() {
        0 => Err(ManifestError::NotAMapping.into()),
        1 => Ok(docs.remove(0)),
        n => Err(ManifestError::MultipleDocuments(n).into()),
    }
}

/// Serialize a manifest as block-style YAML, without a document marker
pub fn emit_manifest(doc: &Yaml) -> Result<String> {
    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(doc)
        .context("Failed to serialize manifest")?;

    let mut body = match out.strip_prefix("---") {
        Some(rest) => rest.trim_start_matches([' ', '\n']).to_string(),
        None => out,
    };
    body.push('\n');
    Ok(body)
}

/// Point the published services of a parsed manifest at their registry images.
///
/// For each of `server` and `client` found under `services`, the `build` key is
/// dropped and `image` is set to the reference computed by `target`. Everything
/// else, including key order, is left as it was.
pub fn rewrite_document(mut doc: Yaml, target: &ImageTarget) -> Result<Rewrite, ManifestError> {
    let services = match &mut doc {
        Yaml::Hash(root) => rewrite_services(root, target)?,
        _ => return Err(ManifestError::NotAMapping),
    };

    Ok(Rewrite {
        document: doc,
        services,
    })
}

fn rewrite_services(root: &mut Hash, target: &ImageTarget) -> Result<Vec<String>, ManifestError> {
    let services = match root.get_mut(&key(SERVICES_KEY)) {
        Some(Yaml::Hash(services)) => services,
        None | Some(Yaml::Null) => {
            debug!("Manifest has no services");
            return Ok(Vec::new());
        }
        Some(_) => return Err(ManifestError::ServicesNotAMapping),
    };

    let mut rewritten = Vec::new();

    for name in PUBLISHED_SERVICES {
        let service = match services.get_mut(&key(name)) {
            Some(Yaml::Hash(service)) => service,
            Some(_) => return Err(ManifestError::ServiceNotAMapping(name.to_string())),
            None => {
                debug!("Service {} not in manifest, skipping", name);
                continue;
            }
        };

        if service.remove(&key(BUILD_KEY)).is_some() {
            debug!("Removed build section from service {}", name);
        }

        let image_ref = target.image_for(name);
        info!("Setting image for service {}: {}", name, image_ref);

        // Overwrite in place so an existing image key keeps its position
        match service.get_mut(&key(IMAGE_KEY)) {
            Some(image) => *image = Yaml::String(image_ref),
            None => {
                service.insert(key(IMAGE_KEY), Yaml::String(image_ref));
            }
        }

        rewritten.push(name.to_string());
    }

    Ok(rewritten)
}

/// Rewrite manifest text, returning the new document as YAML text
pub fn rewrite_manifest(content: &str, target: &ImageTarget) -> Result<String> {
    let doc = parse_manifest(content)?;
    let rewrite = rewrite_document(doc, target)?;
    emit_manifest(&rewrite.document)
}
