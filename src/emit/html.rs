use super::{ComponentFile, EmissionBackend, Framework};

/// Plain HTML fragments; no cross-component references.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl EmissionBackend for HtmlBackend {
    fn framework(&self) -> Framework {
        Framework::Html
    }

    fn render_file(
        &self,
        name: &str,
        markup: &str,
        _imports: &[String],
        extension: &str,
    ) -> ComponentFile {
        ComponentFile {
            name: name.to_string(),
            relative_path: self.relative_path(name, extension),
            contents: format!("{markup}\n"),
            scaffold: None,
        }
    }
}
