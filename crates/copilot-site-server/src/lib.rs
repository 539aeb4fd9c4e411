//! Router and page renderer for the Copilot demo site.
//!
//! [`app`] builds an immutable axum [`Router`](axum::Router) from a
//! [`SiteConfig`]. The same router backs both the live server and the static
//! freezer, which drives it in-process.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod templates;

pub use config::{ConfigOverrides, SiteConfig};
pub use error::{ConfigError, ErrorPage, RenderError, ServerError};
pub use routes::{app, Route, ROUTES};
pub use server::serve;
pub use templates::{PageContext, TemplateEngine};
