//! Copilot feature examples shown on the examples page.

use serde::Serialize;

/// A Copilot capability with the features that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const COPILOT_EXAMPLES: &[ExampleEntry] = &[
    ExampleEntry {
        title: "Code Completion",
        description: "Copilot suggests code completions as you type",
        features: &[
            "Context-aware suggestions",
            "Multiple language support",
            "Function and class generation",
        ],
    },
    ExampleEntry {
        title: "Documentation Generation",
        description: "Generate docstrings and comments automatically",
        features: &[
            "Doc comments that follow project conventions",
            "Parameter descriptions",
            "Return value documentation",
        ],
    },
    ExampleEntry {
        title: "Test Generation",
        description: "Create comprehensive test cases for your code",
        features: &[
            "Unit test generation",
            "Edge case coverage",
            "Fixture creation",
        ],
    },
    ExampleEntry {
        title: "Code Refactoring",
        description: "Refactor existing code following best practices",
        features: &[
            "Function extraction",
            "Variable renaming",
            "Code optimization",
        ],
    },
    ExampleEntry {
        title: "Bug Fixing",
        description: "Identify and fix bugs with Copilot assistance",
        features: &[
            "Error analysis",
            "Solution suggestions",
            "Error handling improvements",
        ],
    },
    ExampleEntry {
        title: "Code Translation",
        description: "Convert code between different languages",
        features: &[
            "Multi-language support",
            "Idiom preservation",
            "Best practices application",
        ],
    },
];

/// All feature examples in display order.
pub fn get_examples() -> &'static [ExampleEntry] {
    COPILOT_EXAMPLES
}
