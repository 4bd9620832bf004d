use super::{escape_markup, ComponentFile, EmissionBackend, Framework};

/// JSX function components using `className`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactBackend;

impl EmissionBackend for ReactBackend {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn class_attr(&self) -> &'static str {
        "className"
    }

    /// Braces open expressions in JSX text.
    fn escape_text(&self, text: &str) -> String {
        escape_markup(text)
            .replace('{', "&#123;")
            .replace('}', "&#125;")
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
        let mut contents = String::new();
        for import in imports {
            contents.push_str(&format!("import {import} from \"./{import}\";\n"));
        }
        if !imports.is_empty() {
            contents.push('\n');
        }
        let body = if markup.is_empty() {
            "  return null;\n".to_string()
        } else {
            format!("  return (\n    {markup}\n  );\n")
        };
        contents.push_str(&format!(
            "const {name} = () => {{\n{body}}};\n\nexport default {name};\n"
        ));

        ComponentFile {
            name: name.to_string(),
            relative_path: self.relative_path(name, extension),
            contents,
            scaffold: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tailwind::StyleSet;
    use std::path::PathBuf;

    #[test]
    fn uses_class_name_attribute() {
        let styles: StyleSet = ["p-4"].into_iter().collect();
        assert_eq!(
            ReactBackend.text("Hi", &styles),
            r#"<p className="p-4">Hi</p>"#
        );
    }

    #[test]
    fn escapes_braces_in_text() {
        assert_eq!(
            ReactBackend.text("{count}", &StyleSet::new()),
            r#"<p className="">&#123;count&#125;</p>"#
        );
    }

    #[test]
    fn file_lists_imports_in_order_before_body() {
        let file = ReactBackend.render_file(
            "Profile",
            "<div className=\"\"><Card /><Avatar /></div>",
            &["Card".into(), "Avatar".into()],
            "tsx",
        );
        assert_eq!(file.relative_path, PathBuf::from("Profile.tsx"));
        assert_eq!(
            file.contents,
            concat!(
                "import Card from \"./Card\";\n",
                "import Avatar from \"./Avatar\";\n",
                "\n",
                "const Profile = () => {\n",
                "  return (\n",
                "    <div className=\"\"><Card /><Avatar /></div>\n",
                "  );\n",
                "};\n",
                "\n",
                "export default Profile;\n"
            )
        );
    }

    #[test]
    fn empty_markup_returns_null() {
        let file = ReactBackend.render_file("Card", "", &[], "jsx");
        assert_eq!(
            file.contents,
            "const Card = () => {\n  return null;\n};\n\nexport default Card;\n"
        );
    }

    #[test]
    fn file_without_imports_starts_with_component() {
        let file = ReactBackend.render_file("Card", "<p className=\"\">x</p>", &[], "jsx");
        assert!(file.contents.starts_with("const Card = () => {"));
    }
}
