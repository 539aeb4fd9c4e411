//! Step-by-step tutorials shown on the tutorials page.

use serde::Serialize;

/// A short hands-on tutorial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TutorialEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Audience level: "Beginner", "Intermediate" or "Advanced"
    pub level: &'static str,
    pub steps: &'static [&'static str],
}

const TUTORIALS: &[TutorialEntry] = &[
    TutorialEntry {
        title: "Your First Completion",
        description: "Install the extension and accept your first inline suggestion",
        level: "Beginner",
        steps: &[
            "Install the GitHub Copilot extension in your editor",
            "Sign in with your GitHub account",
            "Open a new file and write a descriptive function signature",
            "Press Tab to accept the suggestion",
        ],
    },
    TutorialEntry {
        title: "Prompting with Comments",
        description: "Steer suggestions by describing intent in plain language",
        level: "Beginner",
        steps: &[
            "Write a comment that states what the next block should do",
            "Include input and output examples in the comment",
            "Cycle through alternative suggestions before accepting one",
        ],
    },
    TutorialEntry {
        title: "Writing Tests with Copilot Chat",
        description: "Generate a test suite for an existing module",
        level: "Intermediate",
        steps: &[
            "Select the function you want covered",
            "Ask Copilot Chat to generate unit tests for it",
            "Review edge cases and add the ones it missed",
            "Run the tests and iterate on failures",
        ],
    },
    TutorialEntry {
        title: "Custom Repository Instructions",
        description: "Teach Copilot your project conventions",
        level: "Advanced",
        steps: &[
            "Create .github/copilot-instructions.md in the repository",
            "Describe coding standards, naming and test expectations",
            "Verify Copilot Chat references the instructions in its answers",
        ],
    },
];

/// All tutorials in display order.
pub fn get_tutorials() -> &'static [TutorialEntry] {
    TUTORIALS
}
