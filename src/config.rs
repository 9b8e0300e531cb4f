//! Manifest handling for pagegen.
//! A manifest (`pagegen.json`, `pagegen.yml` or `pagegen.yaml`) replaces the built-in
//! admin and/or public sets. Sections left out fall back to the built-ins.

use crate::builtin::ADMIN_TEMPLATE;
use crate::component::{capitalize, GeneratorSet, SetKind};
use crate::constants::{ADMIN_DIR, ADMIN_EXTENSION, PUBLIC_DIR};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Templated component group.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    #[serde(default = "default_admin_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_admin_extension")]
    pub extension: String,
    /// Overrides the built-in template; `name` is the only variable
    #[serde(default)]
    pub template: Option<String>,
    pub components: Vec<String>,
}

/// Verbatim page group.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicConfig {
    #[serde(default = "default_public_dir")]
    pub dir: PathBuf,
    /// File name to literal content, in generation order
    pub pages: IndexMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub admin: Option<AdminConfig>,
    #[serde(default)]
    pub public: Option<PublicConfig>,
}

fn default_admin_dir() -> PathBuf {
    PathBuf::from(ADMIN_DIR)
}

fn default_admin_extension() -> String {
    ADMIN_EXTENSION.to_string()
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(PUBLIC_DIR)
}

/// Finds and reads the manifest.
///
/// # Arguments
/// * `root` - Output root searched for `config_files`
/// * `explicit` - Path given with `--config`; must exist when set
/// * `config_files` - File names to try, in order
///
/// # Returns
/// * `Result<Option<String>>` - Manifest content, or `None` when no manifest is present
///
/// # Errors
/// * `Error::ConfigError` if `explicit` is not a readable file
pub fn load_manifest<P: AsRef<Path>>(
    root: P,
    explicit: Option<&Path>,
    config_files: &[&str],
) -> Result<Option<String>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(Error::ConfigError(format!(
                "manifest not found: {}",
                path.display()
            )));
        }
        debug!("Loading manifest from {}", path.display());
        return Ok(Some(std::fs::read_to_string(path)?));
    }

    for file in config_files {
        let config_path = root.as_ref().join(file);
        if config_path.is_file() {
            debug!("Loading manifest from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path)?));
        }
    }

    debug!("No manifest found, using built-in sets");
    Ok(None)
}

/// Parses manifest content as JSON, falling back to YAML, and validates it.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor YAML, or fails validation
pub fn parse_manifest(content: &str) -> Result<Manifest> {
    let manifest: Manifest = match serde_json::from_str(content) {
        Ok(manifest) => manifest,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid manifest format: {e}")))?,
    };
    validate_manifest(&manifest)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if let Some(admin) = &manifest.admin {
        let identifier = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$")
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let mut seen = HashSet::new();
        for raw in &admin.components {
            let name = capitalize(raw);
            if !identifier.is_match(&name) {
                return Err(Error::ConfigError(format!(
                    "admin component '{raw}' is not a valid identifier"
                )));
            }
            if !seen.insert(name) {
                return Err(Error::ConfigError(format!(
                    "admin component '{raw}' is listed more than once"
                )));
            }
        }
        if admin.extension.is_empty() || admin.extension.contains(['/', '\\']) {
            return Err(Error::ConfigError(format!(
                "invalid admin extension '{}'",
                admin.extension
            )));
        }
    }

    if let Some(public) = &manifest.public {
        for file_name in public.pages.keys() {
            if !is_plain_file_name(file_name) {
                return Err(Error::ConfigError(format!(
                    "public page '{file_name}' must be a plain file name"
                )));
            }
        }
    }

    Ok(())
}

/// True for a single, normal path component without separators.
fn is_plain_file_name(file_name: &str) -> bool {
    if file_name.is_empty() || file_name.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Builds the sets to generate, in the order they were requested.
///
/// Sections present in the manifest replace the matching built-in set.
pub fn resolve_sets(manifest: Option<Manifest>, kinds: &[SetKind]) -> Vec<GeneratorSet> {
    let Manifest {
        mut admin,
        mut public,
    } = manifest.unwrap_or_default();

    kinds
        .iter()
        .map(|kind| match kind {
            SetKind::Admin => match admin.take() {
                Some(config) => GeneratorSet::admin(
                    &config.dir,
                    &config.extension,
                    config.template.as_deref().unwrap_or(ADMIN_TEMPLATE),
                    &config.components,
                ),
                None => GeneratorSet::builtin_admin(),
            },
            SetKind::Public => match public.take() {
                Some(config) => GeneratorSet::public(&config.dir, &config.pages),
                None => GeneratorSet::builtin_public(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_file_names() {
        assert!(is_plain_file_name("Home.js"));
        assert!(!is_plain_file_name(""));
        assert!(!is_plain_file_name("."));
        assert!(!is_plain_file_name(".."));
        assert!(!is_plain_file_name("nested/Home.js"));
        assert!(!is_plain_file_name("nested\\Home.js"));
    }
}
