//! Emission backends: turn classified nodes into framework markup and
//! component source files.
//!
//! Every backend shares the same element shapes; the differences are the
//! class attribute spelling, text escaping, the file wrapper and where the
//! file lives. [`select`] maps a [`Framework`] to its backend and [`detect`]
//! picks a framework from a project's dependency manifest.

pub mod angular;
pub mod html;
pub mod react;
pub mod vue;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::convert::naming;
use crate::tailwind::StyleSet;
use crate::{FigcompError, Result};

pub use angular::AngularBackend;
pub use html::HtmlBackend;
pub use react::ReactBackend;
pub use vue::VueBackend;

/// Target framework identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Html,
    React,
    Vue,
    Angular,
}

impl Framework {
    pub const ALL: [Framework; 4] = [
        Framework::Html,
        Framework::React,
        Framework::Vue,
        Framework::Angular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Html => "html",
            Framework::React => "react",
            Framework::Vue => "vue",
            Framework::Angular => "angular",
        }
    }

    /// Extension used for component files and the existing-component lookup.
    pub fn extension(&self, typescript: bool) -> &'static str {
        match self {
            Framework::Html => "html",
            Framework::React if typescript => "tsx",
            Framework::React => "jsx",
            Framework::Vue => "vue",
            Framework::Angular => "ts",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = FigcompError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Framework::ALL
            .into_iter()
            .find(|framework| framework.as_str() == wanted)
            .ok_or_else(|| FigcompError::UnknownFramework(s.to_string()))
    }
}

/// External command that must run before the component file is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for ScaffoldCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A fully rendered component, ready for the component store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFile {
    pub name: String,
    /// Path relative to the store's root directory.
    pub relative_path: PathBuf,
    pub contents: String,
    pub scaffold: Option<ScaffoldCommand>,
}

/// Escape text and attribute values for HTML-like templates.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Markup fragments and the file wrapper for one target framework.
///
/// Element methods take already-escaped child fragments and raw text values;
/// backends escape the raw values themselves.
pub trait EmissionBackend: Send + Sync {
    fn framework(&self) -> Framework;

    fn class_attr(&self) -> &'static str {
        "class"
    }

    fn escape_text(&self, text: &str) -> String {
        escape_markup(text)
    }

    /// Whether generated files can import other components.
    fn supports_component_imports(&self) -> bool {
        false
    }

    fn sanitize_name(&self, raw: &str) -> String {
        naming::sanitize_name(raw)
    }

    fn image(&self, url: &str, styles: &StyleSet) -> String {
        format!(
            r#"<img src="{}" {}="{}" />"#,
            escape_markup(url),
            self.class_attr(),
            styles
        )
    }

    fn image_container(&self, url: &str, styles: &StyleSet) -> String {
        format!(
            r#"<div {}="{}"><img src="{}" /></div>"#,
            self.class_attr(),
            styles,
            escape_markup(url)
        )
    }

    fn text(&self, text: &str, styles: &StyleSet) -> String {
        format!(
            r#"<p {}="{}">{}</p>"#,
            self.class_attr(),
            styles,
            self.escape_text(text)
        )
    }

    fn label(&self, text: &str, styles: &StyleSet) -> String {
        format!(
            r#"<label {}="{}">{}</label>"#,
            self.class_attr(),
            styles,
            self.escape_text(text)
        )
    }

    fn input(&self, placeholder: &str, styles: &StyleSet) -> String {
        let mut classes = StyleSet::new();
        classes.push("focus:outline-none");
        classes.append(styles.clone());
        format!(
            r#"<input type="text" placeholder="{}" {}="{}" />"#,
            escape_markup(placeholder),
            self.class_attr(),
            classes
        )
    }

    fn table_head(&self, cells: &str) -> String {
        format!(
            r#"<thead><tr {}="flex">{}</tr></thead>"#,
            self.class_attr(),
            cells
        )
    }

    fn table_body(&self, cells: &str) -> String {
        format!(
            r#"<tbody><tr {}="flex">{}</tr></tbody>"#,
            self.class_attr(),
            cells
        )
    }

    fn table(&self, head: &str, body: &str) -> String {
        format!(
            r#"<div {}="overflow-x-scroll"><table>{}{}</table></div>"#,
            self.class_attr(),
            head,
            body
        )
    }

    fn heading_cell(&self, children: &str, styles: &StyleSet) -> String {
        format!(r#"<th {}="{}">{}</th>"#, self.class_attr(), styles, children)
    }

    fn data_cell(&self, children: &str, styles: &StyleSet) -> String {
        format!(r#"<td {}="{}">{}</td>"#, self.class_attr(), styles, children)
    }

    fn container(&self, children: &[String], styles: &StyleSet) -> String {
        format!(
            r#"<div {}="{}">{}</div>"#,
            self.class_attr(),
            styles,
            children.concat()
        )
    }

    fn component_reference(&self, name: &str) -> String {
        format!("<{name} />")
    }

    /// Location of a component file below the store root.
    fn relative_path(&self, name: &str, extension: &str) -> PathBuf {
        PathBuf::from(format!("{name}.{extension}"))
    }

    /// Wrap the root markup into a component source file.
    fn render_file(
        &self,
        name: &str,
        markup: &str,
        imports: &[String],
        extension: &str,
    ) -> ComponentFile;
}

/// Backend for a known framework.
pub fn select(framework: Framework) -> Arc<dyn EmissionBackend> {
    match framework {
        Framework::Html => Arc::new(HtmlBackend),
        Framework::React => Arc::new(ReactBackend),
        Framework::Vue => Arc::new(VueBackend),
        Framework::Angular => Arc::new(AngularBackend),
    }
}

/// Backend for a framework identifier such as `"react"`.
pub fn select_by_id(id: &str) -> Result<Arc<dyn EmissionBackend>> {
    id.parse::<Framework>().map(select)
}

/// Result of framework detection. Both fields are `None` when no known
/// framework is declared; callers treat that as "cannot proceed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProjectTarget {
    pub framework: Option<Framework>,
    pub extension: Option<&'static str>,
}

impl ProjectTarget {
    pub fn new(framework: Framework, typescript: bool) -> Self {
        Self {
            framework: Some(framework),
            extension: Some(framework.extension(typescript)),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_known(&self) -> bool {
        self.framework.is_some()
    }
}

/// Dependency names checked in order; the first declared one wins.
const DETECTION_ORDER: &[(&str, Framework)] = &[
    ("react", Framework::React),
    ("vue", Framework::Vue),
    ("@angular/core", Framework::Angular),
];

/// Pick the target framework from a parsed `package.json`.
pub fn detect(manifest: &serde_json::Value, typescript: bool) -> ProjectTarget {
    let declared = |dependency: &str| {
        ["dependencies", "devDependencies"].iter().any(|section| {
            manifest
                .get(section)
                .and_then(|deps| deps.get(dependency))
                .is_some()
        })
    };

    DETECTION_ORDER
        .iter()
        .find(|(dependency, _)| declared(dependency))
        .map(|(_, framework)| ProjectTarget::new(*framework, typescript))
        .unwrap_or_else(ProjectTarget::unknown)
}
