//! figcomp library
//!
//! Turns a Figma frame into a Tailwind-styled front-end component for
//! React, Vue, Angular or plain HTML.
//!
//! # Module Overview
//!
//! - [`figma`] - design node model and the Figma REST client
//! - [`tailwind`] - utility classes for a node's visual properties, nearest palette colors
//! - [`convert`] - node classification and the concurrent tree walk
//! - [`emit`] - per-framework markup and component files, backend selection
//! - [`project`] - framework detection and the on-disk component store
//! - [`config`] - configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use std::sync::Arc;
//! use figcomp_lib::{emit, project, Config, Converter, FigmaClient, FsComponentStore};
//!
//! # async fn example() -> figcomp_lib::Result<()> {
//! let config = Config::default();
//! let project_dir = Path::new(".");
//! let backend = emit::select_by_id("react")?;
//! let root = config.component_root(project_dir, backend.framework());
//!
//! let client = FigmaClient::new("figd_token").map_err(figcomp_lib::map_figma_error)?;
//! let store = FsComponentStore::new(project_dir, root, backend.clone());
//! let converter = Converter::new(Arc::new(client), Arc::new(store), backend, "jsx");
//!
//! let created = converter.create_component("FILE_KEY", "12-34").await?;
//! println!("wrote {:?}", created.path);
//! # let _ = project::detect_project(project_dir);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod convert;
pub mod emit;
pub mod error;
pub mod figma;
pub mod logging;
pub mod output;
pub mod project;
pub mod resource;
pub mod tailwind;

pub use config::{Config, ConfigError};
pub use convert::{
    ComponentStore, Conversion, ConversionContext, Converter, CreatedComponent, DesignSource,
    ImportRecord, SemanticRole,
};
pub use emit::{
    ComponentFile, EmissionBackend, Framework, ProjectTarget, ScaffoldCommand,
};
pub use error::{ErrorCategory, ErrorPayload, FigcompError, Result};
pub use figma::{map_figma_error, DesignNode, FigmaAuth, FigmaClient, FigmaError};
pub use output::{
    CreateOutput, DesignReference, DetectOutput, ErrorOutput, FigcompOutput,
    FIGCOMP_OUTPUT_VERSION,
};
pub use project::{detect_project, FsComponentStore};
pub use resource::{parse_figma_link, FigmaInfo};
pub use tailwind::{map_styles, resolve_color, StyleSet};
