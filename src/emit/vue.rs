use super::{ComponentFile, EmissionBackend, Framework};

/// Single-file components with a `<script setup>` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct VueBackend;

impl EmissionBackend for VueBackend {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn supports_component_imports(&self) -> bool {
        true
    }

    fn render_file(
        &self,
        name: &str,
        markup: &str,
        imports: &[String],
        extension: &str,
    ) -> ComponentFile {
        let mut contents = String::from("<script setup>\n");
        for import in imports {
            contents.push_str(&format!("import {import} from \"./{import}.{extension}\";\n"));
        }
        contents.push_str("</script>\n\n<template>\n");
        if !markup.is_empty() {
            contents.push_str(&format!("  {markup}\n"));
        }
        contents.push_str("</template>\n");

        ComponentFile {
            name: name.to_string(),
            relative_path: self.relative_path(name, extension),
            contents,
            scaffold: None,
        }
    }
}
