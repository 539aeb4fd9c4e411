//! Template engine for rendering site pages.

use minijinja::{Environment, ErrorKind};
use serde::Serialize;

use copilot_site_content::{ExampleEntry, GuideSection, ResourceCategory, TutorialEntry};

use crate::error::RenderError;

/// Values a page template is rendered with.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageContext {
    /// Page title
    pub title: String,
    /// Navigation entry to highlight
    pub active_page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<&'static [ExampleEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorials: Option<&'static [TutorialEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide: Option<Vec<GuideSection>>,
    /// Error message shown on the 500 page in debug mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl PageContext {
    pub fn new(title: impl Into<String>, active_page: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            active_page: active_page.into(),
            ..Default::default()
        }
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the site templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for &(name, source) in TEMPLATES {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Failed to add template {}: {}", name, e));
        }

        Self { env }
    }

    /// Render the named template with `context`.
    pub fn render(&self, template: &str, context: &PageContext) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(template).map_err(|e| match e.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(template.to_string()),
            _ => RenderError::Template(e.to_string()),
        })?;

        tmpl.render(context)
            .map_err(|e| RenderError::Template(e.to_string()))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", BASE_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("resources.html", RESOURCES_TEMPLATE),
    ("examples.html", EXAMPLES_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("author.html", AUTHOR_TEMPLATE),
    ("tutorials.html", TUTORIALS_TEMPLATE),
    ("copilot-integration.html", INTEGRATION_TEMPLATE),
    ("404.html", NOT_FOUND_TEMPLATE),
    ("500.html", INTERNAL_ERROR_TEMPLATE),
];

// Site links are written root-relative (`href="/resources"`); the static
// freezer rewrites exactly these literals, so keep them in this form.
const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="Learn what GitHub Copilot can do, with curated resources and hands-on examples.">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
  <header class="site-header">
    <nav class="navbar">
      <a href="/" class="nav-brand">GitHub Copilot Demo</a>
      <ul class="nav-links">
        <li><a href="/"{% if active_page == "home" %} class="active"{% endif %}>Home</a></li>
        <li><a href="/resources"{% if active_page == "resources" %} class="active"{% endif %}>Resources</a></li>
        <li><a href="/examples"{% if active_page == "examples" %} class="active"{% endif %}>Examples</a></li>
        <li><a href="/tutorials"{% if active_page == "tutorials" %} class="active"{% endif %}>Tutorials</a></li>
        <li><a href="/copilot-integration"{% if active_page == "copilot-integration" %} class="active"{% endif %}>Integration</a></li>
        <li><a href="/about"{% if active_page == "about" %} class="active"{% endif %}>About</a></li>
        <li><a href="/author"{% if active_page == "author" %} class="active"{% endif %}>Author</a></li>
      </ul>
      <button id="theme-toggle" class="theme-toggle" type="button" aria-label="Toggle theme">
        <span class="theme-icon">&#127769;</span>
        <span class="theme-text">Dark</span>
      </button>
    </nav>
  </header>
  <main class="container">
    {% block content %}{% endblock %}
  </main>
  <footer class="site-footer">
    <p>Built to showcase GitHub Copilot. <a href="/about">About this project</a></p>
  </footer>
  <script src="/static/js/main.js"></script>
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="hero">
  <h1>GitHub Copilot Demo</h1>
  <p class="lead">Your AI pair programmer: from inline completions to chat-driven refactoring.</p>
  <div class="hero-actions">
    <a href="/examples" class="btn btn-primary">See Examples</a>
    <a href="/resources" class="btn btn-secondary">Browse Resources</a>
  </div>
</section>
<section class="features">
  <div class="feature-card">
    <h2>Write Faster</h2>
    <p>Suggestions for whole lines and functions, right in your editor.</p>
  </div>
  <div class="feature-card">
    <h2>Learn by Doing</h2>
    <p>Step through the <a href="/tutorials">tutorials</a> to build good prompting habits.</p>
  </div>
  <div class="feature-card">
    <h2>Fit Your Workflow</h2>
    <p>Read the <a href="/copilot-integration">integration guide</a> to set Copilot up for your team.</p>
  </div>
</section>
{% endblock %}"##;

const RESOURCES_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Learning Resources</h1>
<p class="lead">Official documentation, guides and community material for GitHub Copilot.</p>
{% for category in resources %}
<section class="resource-category" id="{{ category.slug }}">
  <h2>{{ category.name }}</h2>
  {% for resource in category.resources %}
  <div class="resource">
    <h3><a href="{{ resource.url|safe }}" target="_blank" rel="noopener">{{ resource.title }}</a></h3>
    <p>{{ resource.description }}</p>
  </div>
  {% endfor %}
</section>
{% endfor %}
<section class="resource-category" id="community-projects">
  <h2>Community Projects</h2>
  <div class="resource">
    <h3><a href="https://github.com/github/awesome-copilot" target="_blank" rel="noopener">Awesome Copilot</a></h3>
    <p>A curated list of GitHub Copilot resources, from official documentation and community tutorials to third-party integrations and best practice collections.</p>
  </div>
</section>
{% endblock %}"##;

const EXAMPLES_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Copilot Examples</h1>
<p class="lead">Each example below is a feature you can try in your own editor today.</p>
<div class="example-grid">
  {% for example in examples %}
  <article class="example-card">
    <h2>{{ example.title }}</h2>
    <p>{{ example.description }}</p>
    <ul class="feature-list">
      {% for feature in example.features %}
      <li>{{ feature }}</li>
      {% endfor %}
    </ul>
  </article>
  {% endfor %}
</div>
{% endblock %}"##;

const ABOUT_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>About This Project</h1>
<p>This site demonstrates how GitHub Copilot fits into everyday development:
writing code, documenting it, testing it and keeping it maintainable.</p>
<h2>How It Is Built</h2>
<p>Pages are rendered from templates by a small web application and frozen into
static HTML for hosting. Every page you see here is also available as a plain file.</p>
<h2>Where to Go Next</h2>
<ul>
  <li><a href="/resources">Learning resources</a></li>
  <li><a href="/examples">Feature examples</a></li>
  <li><a href="/author">About the author</a></li>
</ul>
{% endblock %}"##;

const AUTHOR_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>About the Author</h1>
<section class="author-card">
  <h2>Raisa Energy</h2>
  <p>This project is maintained by engineers at Raisa Energy who use GitHub
  Copilot every day and help other teams adopt AI-assisted development.</p>
  <p>The material here started as notes for internal enablement sessions and is
  shared so that anyone can follow along.</p>
</section>
{% endblock %}"##;

const TUTORIALS_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Copilot Tutorials</h1>
<p class="lead">Short, hands-on walkthroughs. Start at the top if Copilot is new to you.</p>
{% for tutorial in tutorials %}
<article class="tutorial">
  <h2>{{ tutorial.title }} <span class="badge">{{ tutorial.level }}</span></h2>
  <p>{{ tutorial.description }}</p>
  <ol>
    {% for step in tutorial.steps %}
    <li>{{ step }}</li>
    {% endfor %}
  </ol>
</article>
{% endfor %}
{% endblock %}"##;

const INTEGRATION_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Copilot Integration Guide</h1>
<nav class="toc">
  <ul>
    {% for section in guide %}
    <li><a href="#{{ section.id }}">{{ section.title }}</a></li>
    {% endfor %}
  </ul>
</nav>
{% for section in guide %}
<section class="guide-section" id="{{ section.id }}">
  <h2>{{ section.title }}</h2>
  {{ section.html|safe }}
</section>
{% endfor %}
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="error-page">
  <h1>404</h1>
  <h2>Page Not Found</h2>
  <p>The page you are looking for does not exist or has moved.</p>
  <a href="/" class="btn btn-primary">Go Home</a>
</section>
{% endblock %}"##;

const INTERNAL_ERROR_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="error-page">
  <h1>500</h1>
  <h2>Server Error</h2>
  <p>Something went wrong on our end. Please try again later.</p>
  {% if error_detail %}<pre class="error-detail">{{ error_detail }}</pre>{% endif %}
  <a href="/" class="btn btn-primary">Go Home</a>
</section>
{% endblock %}"##;
