//! Learning resources shown on the resources page.

use serde::Serialize;

/// A single external learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Display title
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Absolute URL of the resource
    pub url: &'static str,
    /// Category the resource is grouped under
    pub category: &'static str,
}

/// Resources sharing a category, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceCategory {
    /// Category name as shown in headings
    pub name: &'static str,
    /// Anchor id for the category section
    pub slug: String,
    /// Entries in this category
    pub resources: Vec<&'static ResourceEntry>,
}

const LEARNING_RESOURCES: &[ResourceEntry] = &[
    ResourceEntry {
        title: "GitHub Copilot Documentation",
        description: "Official documentation for GitHub Copilot",
        url: "https://docs.github.com/en/copilot",
        category: "Official Docs",
    },
    ResourceEntry {
        title: "Getting Started with Copilot",
        description: "Quick start guide for GitHub Copilot",
        url: "https://docs.github.com/en/copilot/quickstart",
        category: "Getting Started",
    },
    ResourceEntry {
        title: "Copilot Best Practices",
        description: "Learn best practices for using GitHub Copilot effectively",
        url: "https://github.blog/2023-06-20-how-to-write-better-prompts-for-github-copilot/",
        category: "Best Practices",
    },
    ResourceEntry {
        title: "Copilot Chat",
        description: "Using GitHub Copilot Chat for interactive assistance",
        url: "https://docs.github.com/en/copilot/github-copilot-chat",
        category: "Features",
    },
    ResourceEntry {
        title: "Copilot for Business",
        description: "Information about GitHub Copilot for organizations",
        url: "https://docs.github.com/en/copilot/overview-of-github-copilot/about-github-copilot-for-business",
        category: "Enterprise",
    },
    ResourceEntry {
        title: "Awesome Copilot",
        description: "Curated list of GitHub Copilot resources and examples",
        url: "https://github.com/github/awesome-copilot",
        category: "Community",
    },
];

/// All learning resources as a flat list.
pub fn learning_resources() -> &'static [ResourceEntry] {
    LEARNING_RESOURCES
}

/// Learning resources grouped by category.
///
/// Categories keep the order in which they first appear in the resource list,
/// and entries keep their relative order inside each category.
pub fn get_resources() -> Vec<ResourceCategory> {
    let mut categories: Vec<ResourceCategory> = Vec::new();

    for entry in LEARNING_RESOURCES {
        match categories.iter_mut().find(|c| c.name == entry.category) {
            Some(category) => category.resources.push(entry),
            None => categories.push(ResourceCategory {
                name: entry.category,
                slug: slugify(entry.category),
                resources: vec![entry],
            }),
        }
    }

    categories
}

/// Turn a heading into an anchor id: lowercase ASCII words joined by `-`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
