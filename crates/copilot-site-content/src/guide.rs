//! The Copilot integration guide.
//!
//! Sections are authored in Markdown and rendered to HTML on request.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

/// A rendered section of the integration guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideSection {
    /// Anchor id
    pub id: &'static str,
    /// Section heading
    pub title: &'static str,
    /// Section body as HTML
    pub html: String,
}

const SECTIONS: &[(&str, &str, &str)] = &[
    (
        "editor-setup",
        "Editor Setup",
        r#"Copilot ships as an extension for **VS Code**, **Visual Studio**,
**JetBrains IDEs** and **Neovim**. Install it from your editor's marketplace
and sign in with a GitHub account that has an active Copilot seat.

| Editor | Extension |
|--------|-----------|
| VS Code | GitHub Copilot + GitHub Copilot Chat |
| JetBrains | GitHub Copilot plugin |
| Neovim | `github/copilot.vim` |
"#,
    ),
    (
        "project-instructions",
        "Project Instructions",
        r#"Add a `.github/copilot-instructions.md` file to describe the conventions
Copilot should follow in this repository:

```markdown
- Prefer explicit error types over strings
- Every public function gets a doc comment
- Tests live next to the code they cover
```

See the [tutorials](/tutorials) for a walkthrough.
"#,
    ),
    (
        "review-workflow",
        "Review Workflow",
        r#"Treat suggestions like code from a new teammate:

1. Read every suggestion before accepting it
2. Run the test suite after larger completions
3. Ask Copilot Chat to explain code you do not recognise

More material is collected on the [resources](/resources) page.
"#,
    ),
];

/// The integration guide, rendered section by section.
pub fn integration_guide() -> Vec<GuideSection> {
    SECTIONS
        .iter()
        .map(|&(id, title, markdown)| GuideSection {
            id,
            title,
            html: render_markdown(markdown),
        })
        .collect()
}

fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}
