//! Document shell and template composition.

use std::path::Path;

use crate::html_escape;

/// Placeholders recognised in layout files.
pub mod placeholders {
    pub const TITLE: &str = "{{title}}";
    pub const STYLES: &str = "{{styles}}";
    pub const CONTENT: &str = "{{content}}";
    pub const SCRIPTS: &str = "{{scripts}}";
}

/// Head content for the built-in shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Meta tags.
    pub meta: Vec<(String, String)>,
}

impl HeadContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    fn render(&self) -> String {
        let mut html = String::new();

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        html
    }
}

/// Built-in document shell.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// Id of the element the page body is rendered into.
    pub root_id: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            head: HeadContent::new()
                .with_meta("viewport", "width=device-width, initial-scale=1"),
            root_id: "root".to_string(),
        }
    }
}

impl Shell {
    fn render(&self, title: &str, styles: &str, content: &str, scripts: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
{head}<title>{title}</title>
{styles}</head>
<body>
<div id="{root}">{content}</div>
{scripts}</body>
</html>"#,
            head = self.head.render(),
            root = html_escape(&self.root_id),
        )
    }
}

/// Inputs to document composition.
#[derive(Debug, Clone, Default)]
pub struct DocumentParts<'a> {
    /// Page title, escaped on output.
    pub title: &'a str,
    /// Rendered body markup, inserted verbatim.
    pub content: &'a str,
    /// Prefix for every asset URL.
    pub public_path: &'a str,
    /// Scripts needed by the rendered chunks.
    pub chunk_scripts: &'a [String],
    /// Stylesheets needed by the rendered chunks.
    pub chunk_stylesheets: &'a [String],
    /// Files of the selected entry points.
    pub entry_files: &'a [String],
}

impl DocumentParts<'_> {
    /// Chunk stylesheets, then entry CSS files not already listed.
    pub fn stylesheets(&self) -> Vec<&str> {
        merge(self.chunk_stylesheets, self.entry_files, ".css")
    }

    /// Chunk scripts, then entry JS files not already listed.
    pub fn scripts(&self) -> Vec<&str> {
        merge(self.chunk_scripts, self.entry_files, ".js")
    }

    fn style_tags(&self) -> String {
        self.stylesheets()
            .into_iter()
            .map(|file| {
                format!(
                    "<link rel=\"stylesheet\" href=\"{}\">\n",
                    html_escape(&asset_url(self.public_path, file))
                )
            })
            .collect()
    }

    fn script_tags(&self) -> String {
        self.scripts()
            .into_iter()
            .map(|file| {
                format!(
                    "<script type=\"text/javascript\" src=\"{}\" defer></script>\n",
                    html_escape(&asset_url(self.public_path, file))
                )
            })
            .collect()
    }
}

fn merge<'a>(first: &'a [String], entries: &'a [String], suffix: &str) -> Vec<&'a str> {
    let mut files: Vec<&str> = first.iter().map(String::as_str).collect();
    for file in entries.iter().filter(|f| f.ends_with(suffix)) {
        if !files.contains(&file.as_str()) {
            files.push(file);
        }
    }
    files
}

/// Join a public path and a file name with exactly one `/` between them.
pub fn asset_url(public_path: &str, file: &str) -> String {
    if public_path.is_empty() {
        return format!("/{}", file.trim_start_matches('/'));
    }
    format!(
        "{}/{}",
        public_path.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}

/// Layout the final document is composed into.
#[derive(Debug, Clone)]
pub enum LayoutTemplate {
    /// The built-in shell.
    Builtin(Shell),
    /// A layout file with `{{...}}` placeholders.
    Custom(String),
}

impl Default for LayoutTemplate {
    fn default() -> Self {
        Self::Builtin(Shell::default())
    }
}

impl LayoutTemplate {
    /// Load a layout file.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(Self::Custom)
    }

    /// Compose the final document.
    pub fn compose(&self, parts: &DocumentParts<'_>) -> String {
        let title = html_escape(parts.title);
        let styles = parts.style_tags();
        let scripts = parts.script_tags();

        match self {
            Self::Builtin(shell) => shell.render(&title, &styles, parts.content, &scripts),
            Self::Custom(template) => fill(
                template,
                &[
                    (placeholders::TITLE, title.as_str()),
                    (placeholders::STYLES, styles.as_str()),
                    (placeholders::CONTENT, parts.content),
                    (placeholders::SCRIPTS, scripts.as_str()),
                ],
            ),
        }
    }
}

/// Substitute placeholders in one pass over `template`.
///
/// Substituted values are never scanned again, so a title or page body
/// containing `{{...}}` is inserted as-is. Unknown placeholders are kept.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(placeholder, _)| tail.starts_with(placeholder)) {
            Some((placeholder, value)) => {
                out.push_str(value);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push_str("{{");
                rest = &tail[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(asset_url("", "main.js"), "/main.js");
        assert_eq!(asset_url("/static/", "main.js"), "/static/main.js");
        assert_eq!(asset_url("https://cdn.example.com", "/a.css"), "https://cdn.example.com/a.css");
    }

    #[test]
    fn test_merge_chunks_before_entry_files() {
        let chunk_scripts = strings(&["Dashboards-Projects.js", "main.js"]);
        let chunk_styles = strings(&["Dashboards-Projects.css"]);
        let entry_files = strings(&["vendor.js", "main.js", "main.css", "main.js.map"]);

        let parts = DocumentParts {
            chunk_scripts: &chunk_scripts,
            chunk_stylesheets: &chunk_styles,
            entry_files: &entry_files,
            ..Default::default()
        };

        assert_eq!(
            parts.scripts(),
            ["Dashboards-Projects.js", "main.js", "vendor.js"]
        );
        assert_eq!(parts.stylesheets(), ["Dashboards-Projects.css", "main.css"]);
    }

    #[test]
    fn test_builtin_compose() {
        let scripts = strings(&["main.js"]);
        let styles = strings(&["main.css"]);
        let doc = LayoutTemplate::default().compose(&DocumentParts {
            title: "Admin & Co",
            content: "<h1>Projects</h1>",
            public_path: "/static/",
            chunk_scripts: &scripts,
            chunk_stylesheets: &styles,
            entry_files: &[],
        });

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Admin &amp; Co</title>"));
        assert!(doc.contains(r#"<div id="root"><h1>Projects</h1></div>"#));
        assert!(doc.contains(r#"<link rel="stylesheet" href="/static/main.css">"#));
        assert!(doc.contains(r#"src="/static/main.js""#));
        assert!(doc.find("main.css").unwrap() < doc.find("<body>").unwrap());
        assert!(doc.find("main.js").unwrap() > doc.find("<body>").unwrap());
    }

    #[test]
    fn test_custom_compose() {
        let template = LayoutTemplate::Custom(
            "<html><head><title>{{title}}</title>{{styles}}</head><body><div id=\"app\">{{content}}</div>{{scripts}}</body></html>"
                .to_string(),
        );
        let entry_files = strings(&["main.js"]);
        let doc = template.compose(&DocumentParts {
            title: "Dashkit",
            content: "<p>{{title}}</p>",
            entry_files: &entry_files,
            ..Default::default()
        });

        assert!(doc.contains("<title>Dashkit</title>"));
        assert!(doc.contains("<div id=\"app\"><p>{{title}}</p></div>"));
        assert!(doc.contains(r#"src="/main.js""#));
    }

    #[test]
    fn test_custom_compose_does_not_expand_title() {
        let template = LayoutTemplate::Custom(
            "<title>{{title}}</title><main>{{content}}</main>{{unknown}}".to_string(),
        );
        let doc = template.compose(&DocumentParts {
            title: "A {{content}} B",
            content: "<p>body</p>",
            ..Default::default()
        });

        assert_eq!(
            doc,
            "<title>A {{content}} B</title><main><p>body</p></main>{{unknown}}"
        );
    }

    #[test]
    fn test_layout_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<body>{{content}}</body>").unwrap();

        let template = LayoutTemplate::from_file(&path).unwrap();
        let doc = template.compose(&DocumentParts {
            content: "x",
            ..Default::default()
        });
        assert_eq!(doc, "<body>x</body>");

        assert!(LayoutTemplate::from_file(dir.path().join("missing.html")).is_err());
    }
}
