use std::path::PathBuf;

use super::{ComponentFile, EmissionBackend, Framework, ScaffoldCommand};
use crate::convert::naming::kebab_case;

/// Angular templates, generated into a component scaffolded by the Angular CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct AngularBackend;

impl EmissionBackend for AngularBackend {
    fn framework(&self) -> Framework {
        Framework::Angular
    }

    /// `src/app/<kebab>/<kebab>.component.html`; the extension is not part of the path.
    fn relative_path(&self, name: &str, _extension: &str) -> PathBuf {
        let dir = kebab_case(name);
        PathBuf::from(&dir).join(format!("{dir}.component.html"))
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
            scaffold: Some(ScaffoldCommand {
                program: "ng".to_string(),
                args: vec![
                    "generate".to_string(),
                    "component".to_string(),
                    kebab_case(name),
                ],
            }),
        }
    }
}
