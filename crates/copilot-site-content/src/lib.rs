//! Literal content for the Copilot demo site.
//!
//! Everything here is process-constant data: learning resources, feature
//! examples, tutorials, and the integration guide. Nothing does I/O.

pub mod demo;
pub mod examples;
pub mod guide;
pub mod resources;
pub mod tutorials;

pub use demo::{greet, sum_numbers, ExampleError, Person};
pub use examples::{get_examples, ExampleEntry};
pub use guide::{integration_guide, GuideSection};
pub use resources::{get_resources, learning_resources, ResourceCategory, ResourceEntry};
pub use tutorials::{get_tutorials, TutorialEntry};
