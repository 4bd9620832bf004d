//! Design tree to component markup.
//!
//! [`Converter`] fetches the root node from a [`DesignSource`], walks the
//! tree with [`ConversionContext::render_node`] and hands the markup to the
//! selected [`EmissionBackend`]. Sibling subtrees render concurrently and are
//! reassembled in their original order.
//!
//! When reuse is enabled, any node whose sanitized name matches a component
//! already present in the [`ComponentStore`] is emitted as a reference to
//! that component and recorded as an import instead of being expanded.

pub mod classify;
pub mod imports;
pub mod naming;


use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{join_all, BoxFuture, FutureExt};
use tracing::{debug, info, warn};

use crate::emit::{ComponentFile, EmissionBackend, Framework};
use crate::figma::{normalize_node_id, DesignNode};
use crate::tailwind::{map_styles, text_color_classes};
use crate::Result;

pub use classify::{classify, SemanticRole};
pub use imports::ImportRecord;
pub use naming::{kebab_case, sanitize_name};

/// Where design documents and rendered images come from.
pub trait DesignSource: Send + Sync {
    /// The subtree rooted at `node_id` (API form, `12:34`).
    fn fetch_document<'a>(
        &'a self,
        file_key: &'a str,
        node_id: &'a str,
    ) -> BoxFuture<'a, Result<DesignNode>>;

    /// URL of a rendered image of the node, or `None` if nothing was rendered.
    fn fetch_image_url<'a>(
        &'a self,
        file_key: &'a str,
        node_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Previously generated components and the destination of new ones.
pub trait ComponentStore: Send + Sync {
    /// Whether a component file for `name` is already present.
    fn exists(&self, name: &str, extension: &str) -> bool;

    /// Persist a rendered component and return where it was written.
    fn write(&self, file: &ComponentFile) -> Result<PathBuf>;
}

/// Per-run state shared by every node of one conversion.
pub struct ConversionContext<'a> {
    pub file_key: &'a str,
    pub backend: &'a dyn EmissionBackend,
    /// Sanitized name of the root node.
    pub component_name: String,
    /// Extension used to look up existing components.
    pub extension: &'a str,
    pub imports: ImportRecord,
    source: &'a dyn DesignSource,
    store: Option<&'a dyn ComponentStore>,
    lookups: Mutex<HashMap<String, bool>>,
}

impl<'a> ConversionContext<'a> {
    pub fn new(
        file_key: &'a str,
        component_name: String,
        extension: &'a str,
        backend: &'a dyn EmissionBackend,
        source: &'a dyn DesignSource,
    ) -> Self {
        Self {
            file_key,
            backend,
            component_name,
            extension,
            imports: ImportRecord::new(),
            source,
            store: None,
            lookups: Mutex::new(HashMap::new()),
        }
    }

    /// Enable the existing-component short-circuit against `store`.
    pub fn with_reuse(mut self, store: &'a dyn ComponentStore) -> Self {
        if self.backend.supports_component_imports() {
            self.store = Some(store);
        }
        self
    }

    /// Render one node and its subtree to a markup fragment.
    ///
    /// Never fails: image lookups that error out degrade to an empty fragment.
    pub fn render_node<'s>(&'s self, node: &'s DesignNode) -> BoxFuture<'s, String> {
        async move {
            let role = classify(node, |n| self.existing_component(n));
            debug!(node = %node.id, name = %node.name, ?role, "classified node");

            let backend = self.backend;
            match role {
                SemanticRole::Empty => String::new(),
                SemanticRole::ComponentReference(name) => backend.component_reference(&name),
                SemanticRole::Image => match self.image_url(node).await {
                    Some(url) => backend.image(&url, &map_styles(node)),
                    None => String::new(),
                },
                SemanticRole::ImageContainer => match self.image_url(node).await {
                    Some(url) => backend.image_container(&url, &map_styles(node)),
                    None => String::new(),
                },
                SemanticRole::Text => {
                    let text = node.characters.as_deref().unwrap_or_default().trim();
                    backend.text(text, &map_styles(node))
                }
                // The visible label text is the text layer's name, not its characters.
                SemanticRole::Label => match node.first_text_child() {
                    Some(text) => backend.label(&text.name, &map_styles(text)),
                    None => String::new(),
                },
                SemanticRole::Input => {
                    let text = node.first_text_child();
                    let placeholder = text
                        .and_then(|t| t.characters.as_deref())
                        .unwrap_or_default()
                        .trim();
                    let mut styles = map_styles(node);
                    if let Some(text) = text {
                        styles.append(text_color_classes(text));
                    }
                    backend.input(placeholder, &styles)
                }
                SemanticRole::Table => self.render_table(node).await,
                SemanticRole::TableHeadingCell => {
                    let children = self.render_children(&node.children).await;
                    backend.heading_cell(&children.concat(), &map_styles(node))
                }
                SemanticRole::TableDataCell => {
                    let children = self.render_children(&node.children).await;
                    backend.data_cell(&children.concat(), &map_styles(node))
                }
                SemanticRole::Container => {
                    let children = self.render_children(&node.children).await;
                    backend.container(&children, &map_styles(node))
                }
            }
        }
        .boxed()
    }

    /// Render siblings concurrently; the result keeps the input order.
    async fn render_children(&self, children: &[DesignNode]) -> Vec<String> {
        join_all(children.iter().map(|child| self.render_node(child))).await
    }

    /// Columns are the table's children; the first child of each column is
    /// its heading cell and the second its data cell.
    async fn render_table(&self, table: &DesignNode) -> String {
        let columns: Vec<&DesignNode> = table.children.iter().filter(|c| c.visible).collect();
        let heads = join_all(
            columns
                .iter()
                .filter_map(|column| column.children.first())
                .map(|cell| self.render_node(cell)),
        );
        let rows = join_all(
            columns
                .iter()
                .filter_map(|column| column.children.get(1))
                .map(|cell| self.render_node(cell)),
        );
        let (heads, rows) = futures::join!(heads, rows);

        let backend = self.backend;
        backend.table(
            &backend.table_head(&heads.concat()),
            &backend.table_body(&rows.concat()),
        )
    }

    async fn image_url(&self, node: &DesignNode) -> Option<String> {
        match self.source.fetch_image_url(self.file_key, &node.id).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                warn!(node = %node.id, "no rendered image returned; skipping node");
                None
            }
            Err(err) => {
                warn!(node = %node.id, error = %err, "image export failed; skipping node");
                None
            }
        }
    }

    /// Name of the existing component `node` refers to, recording the import.
    fn existing_component(&self, node: &DesignNode) -> Option<String> {
        let store = self.store?;
        let name = self.backend.sanitize_name(node.display_name());
        if name == self.component_name {
            return None;
        }

        let exists = {
            let mut lookups = self.lookups.lock().unwrap_or_else(PoisonError::into_inner);
            *lookups
                .entry(name.clone())
                .or_insert_with(|| store.exists(&name, self.extension))
        };
        if !exists {
            return None;
        }

        if self.imports.insert(&name) {
            debug!(component = %name, "reusing existing component");
        }
        Some(name)
    }
}

/// Markup for one design node, before it is wrapped into a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub component_name: String,
    pub markup: String,
    pub imports: Vec<String>,
}

/// A component that was rendered and, unless it was a dry run, written.
#[derive(Debug, Clone)]
pub struct CreatedComponent {
    pub framework: Framework,
    pub extension: String,
    pub file: ComponentFile,
    pub imports: Vec<String>,
    pub path: Option<PathBuf>,
}

/// Drives one design-to-component conversion.
pub struct Converter {
    source: Arc<dyn DesignSource>,
    store: Arc<dyn ComponentStore>,
    backend: Arc<dyn EmissionBackend>,
    extension: String,
    reuse: bool,
    name_override: Option<String>,
}

impl Converter {
    pub fn new(
        source: Arc<dyn DesignSource>,
        store: Arc<dyn ComponentStore>,
        backend: Arc<dyn EmissionBackend>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            source,
            store,
            backend,
            extension: extension.into(),
            reuse: true,
            name_override: None,
        }
    }

    pub fn with_reuse(mut self, reuse: bool) -> Self {
        self.reuse = reuse;
        self
    }

    /// Name the written component `name` instead of the root layer name.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name_override = name.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn backend(&self) -> &dyn EmissionBackend {
        self.backend.as_ref()
    }

    /// Fetch `node_id` from `file_key` and render it to markup.
    pub async fn convert_design_to_component(
        &self,
        file_key: &str,
        node_id: &str,
    ) -> Result<Conversion> {
        let node_id = normalize_node_id(node_id);
        info!(file_key, node_id = %node_id, framework = %self.backend.framework(), "converting design node");

        let mut root = self.source.fetch_document(file_key, &node_id).await?;
        root.sort_children_by_position();

        let component_name = self.backend.sanitize_name(root.display_name());
        let mut ctx = ConversionContext::new(
            file_key,
            component_name,
            &self.extension,
            self.backend.as_ref(),
            self.source.as_ref(),
        );
        if self.reuse {
            ctx = ctx.with_reuse(self.store.as_ref());
        }

        let markup = ctx.render_node(&root).await;
        let imports = ctx.imports.names();
        info!(
            component = %ctx.component_name,
            imports = imports.len(),
            "conversion finished"
        );

        Ok(Conversion {
            component_name: ctx.component_name,
            markup,
            imports,
        })
    }

    /// Convert and wrap into a component file without writing it.
    pub async fn render_component(&self, file_key: &str, node_id: &str) -> Result<CreatedComponent> {
        let conversion = self.convert_design_to_component(file_key, node_id).await?;
        let name = match &self.name_override {
            Some(raw) => self.backend.sanitize_name(raw),
            None => conversion.component_name,
        };
        let file = self.backend.render_file(
            &name,
            &conversion.markup,
            &conversion.imports,
            &self.extension,
        );

        Ok(CreatedComponent {
            framework: self.backend.framework(),
            extension: self.extension.clone(),
            file,
            imports: conversion.imports,
            path: None,
        })
    }

    /// Convert, render and write the component file once.
    pub async fn create_component(&self, file_key: &str, node_id: &str) -> Result<CreatedComponent> {
        let mut created = self.render_component(file_key, node_id).await?;
        let path = self.store.write(&created.file)?;
        info!(path = %path.display(), "component written");
        created.path = Some(path);
        Ok(created)
    }
}
