//! pagegen scaffolds placeholder front-end page components.
//! It writes a templated admin set and a verbatim public set, optionally
//! overridden by a manifest.

/// Built-in admin component names, template and public pages
pub mod builtin;

/// Command-line interface module for the pagegen application
pub mod cli;

/// Component descriptors and generator sets
pub mod component;

/// Manifest loading, validation and set resolution
/// Supports JSON and YAML formats (pagegen.json, pagegen.yml, pagegen.yaml)
pub mod config;

pub mod constants;

/// Error types and handling for the pagegen application
pub mod error;

/// Glob-based component selection
pub mod filter;

pub mod logger;

/// Directory creation, file writing and the generation loop
pub mod processor;

/// Overwrite confirmation
pub mod prompt;

/// Template rendering for generated components
pub mod renderer;
