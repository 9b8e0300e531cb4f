//! Component descriptors and the generator sets built from them.

use std::path::{Path, PathBuf};

use crate::builtin::{ADMIN_COMPONENTS, ADMIN_TEMPLATE, PUBLIC_PAGES};
use crate::constants::{ADMIN_DIR, ADMIN_EXTENSION, PUBLIC_DIR};

/// Generator group a set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKind {
    Admin,
    Public,
}

impl std::fmt::Display for SetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetKind::Admin => write!(f, "admin"),
            SetKind::Public => write!(f, "public"),
        }
    }
}

/// Content source of a single generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentBody {
    /// Rendered from `template` with `name` substituted
    Template { template: String, name: String },
    /// Written verbatim
    Literal(String),
}

/// Name/content pair driving one generated output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Display name, also used as the export identifier for templated components
    pub name: String,
    /// File name inside the set's directory
    pub file_name: String,
    pub body: ComponentBody,
}

/// An ordered list of components sharing one output directory.
#[derive(Debug, Clone)]
pub struct GeneratorSet {
    pub kind: SetKind,
    /// Output directory relative to the output root
    pub dir: PathBuf,
    pub components: Vec<ComponentDescriptor>,
}

/// Uppercases the first character and lowercases the rest.
///
/// `"dashboard"` becomes `"Dashboard"`, `"productManagement"` becomes `"Productmanagement"`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl GeneratorSet {
    /// Builds a templated set: every raw name is capitalized and rendered into `template`.
    pub fn admin<P, I, S>(dir: P, extension: &str, template: &str, names: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let components = names
            .into_iter()
            .map(|raw| {
                let name = capitalize(raw.as_ref());
                ComponentDescriptor {
                    file_name: format!("{name}.{extension}"),
                    body: ComponentBody::Template {
                        template: template.to_string(),
                        name: name.clone(),
                    },
                    name,
                }
            })
            .collect();

        Self {
            kind: SetKind::Admin,
            dir: dir.as_ref().to_path_buf(),
            components,
        }
    }

    /// Builds a verbatim set from an ordered mapping of file name to content.
    pub fn public<P, I, K, V>(dir: P, pages: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let components = pages
            .into_iter()
            .map(|(file_name, content)| {
                let file_name = file_name.as_ref().to_string();
                let name = Path::new(&file_name)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .unwrap_or(&file_name)
                    .to_string();
                ComponentDescriptor {
                    name,
                    file_name,
                    body: ComponentBody::Literal(content.as_ref().to_string()),
                }
            })
            .collect();

        Self {
            kind: SetKind::Public,
            dir: dir.as_ref().to_path_buf(),
            components,
        }
    }

    /// The admin set compiled into the binary.
    pub fn builtin_admin() -> Self {
        Self::admin(ADMIN_DIR, ADMIN_EXTENSION, ADMIN_TEMPLATE, ADMIN_COMPONENTS)
    }

    /// The public set compiled into the binary.
    pub fn builtin_public() -> Self {
        Self::public(PUBLIC_DIR, PUBLIC_PAGES)
    }

    /// Built-in set for the given kind.
    pub fn builtin(kind: SetKind) -> Self {
        match kind {
            SetKind::Admin => Self::builtin_admin(),
            SetKind::Public => Self::builtin_public(),
        }
    }
}
