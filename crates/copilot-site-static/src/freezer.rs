//! Freezes the site router into static files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use copilot_site_server::{app, SiteConfig, ROUTES};

use crate::assets::{copy_static_assets, AssetSummary};
use crate::rewrite::LinkRewriter;

/// Domain written to `CNAME` by default.
pub const DEFAULT_CNAME: &str = "copilot.agharib.com";

/// Configuration for freezing the site.
#[derive(Debug, Clone)]
pub struct FreezeConfig {
    /// Output directory; recreated on every run
    pub output_dir: PathBuf,

    /// Prefix for rewritten links, ending with `/`
    pub base_url: String,

    /// Custom domain written to `CNAME`
    pub cname: String,

    /// Router configuration; `site.static_dir` is mirrored into the output
    pub site: SiteConfig,
}

impl Default for FreezeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            base_url: "/".to_string(),
            cname: DEFAULT_CNAME.to_string(),
            site: SiteConfig::default(),
        }
    }
}

/// Errors that abort a freeze run.
#[derive(Debug, thiserror::Error)]
pub enum FreezeError {
    #[error("Failed to prepare output directory {path}: {message}")]
    Setup { path: PathBuf, message: String },

    #[error("Failed to copy static assets: {0}")]
    AssetCopy(String),

    #[error("Failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// Why a single route was left out of the output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("response body is not UTF-8")]
    NotUtf8,

    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

/// A route that was skipped during a freeze run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRoute {
    pub route: &'static str,
    pub error: RouteError,
}

/// Result of a freeze run.
#[derive(Debug)]
pub struct FreezeReport {
    /// Pages written, in route order
    pub pages: Vec<PathBuf>,

    /// Routes that failed and were not written
    pub skipped: Vec<SkippedRoute>,

    /// Copied assets, or `None` when there was no asset directory
    pub assets: Option<AssetSummary>,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl FreezeReport {
    /// Whether every route made it into the output.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Routes frozen to disk with their file names: every page plus the 404 page.
pub fn frozen_routes() -> Vec<(&'static str, &'static str)> {
    ROUTES
        .iter()
        .map(|route| (route.path, route.output))
        .chain(std::iter::once(("/404", "404.html")))
        .collect()
}

/// Static site freezer.
pub struct Freezer {
    config: FreezeConfig,
}

impl Freezer {
    /// Create a new freezer.
    pub fn new(config: FreezeConfig) -> Self {
        Self { config }
    }

    /// Freeze every route into the output directory.
    ///
    /// A route that fails is logged and recorded in the report; the remaining
    /// routes are still written. Failing to set up the output directory, copy
    /// assets or write the marker files aborts the run.
    pub async fn freeze(&self) -> Result<FreezeReport, FreezeError> {
        let start = Instant::now();
        let output_dir = &self.config.output_dir;

        prepare_output_dir(output_dir)?;

        let router = app(self.config.site.clone());
        let rewriter = LinkRewriter::new(&self.config.base_url);

        let mut pages = Vec::new();
        let mut skipped = Vec::new();

        for (route, filename) in frozen_routes() {
            tracing::info!("Rendering {} -> {}", route, filename);

            match freeze_route(&router, &rewriter, route, &output_dir.join(filename)).await {
                Ok(path) => {
                    tracing::info!("  Created {}", path.display());
                    pages.push(path);
                }
                Err(error) => {
                    tracing::error!("  Error rendering {}: {}", route, error);
                    skipped.push(SkippedRoute { route, error });
                }
            }
        }

        let assets = copy_static_assets(&self.config.site.static_dir, &output_dir.join("static"))?;

        write_file(&output_dir.join("CNAME"), &format!("{}\n", self.config.cname))?;
        tracing::info!("Created CNAME file for custom domain: {}", self.config.cname);

        write_file(&output_dir.join(".nojekyll"), "")?;
        tracing::info!("Created .nojekyll file");

        Ok(FreezeReport {
            pages,
            skipped,
            assets,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: output_dir.clone(),
        })
    }
}

/// Remove `path` if it exists, then create it empty.
fn prepare_output_dir(path: &Path) -> Result<(), FreezeError> {
    let setup_error = |e: std::io::Error| FreezeError::Setup {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if path.exists() {
        fs::remove_dir_all(path).map_err(setup_error)?;
    }
    fs::create_dir_all(path).map_err(setup_error)
}

fn write_file(path: &Path, content: &str) -> Result<(), FreezeError> {
    fs::write(path, content).map_err(|e| FreezeError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render one route through the router and write it to `target`.
///
/// 404 responses are accepted so the not-found page can be frozen.
async fn freeze_route(
    router: &Router,
    rewriter: &LinkRewriter,
    route: &str,
    target: &Path,
) -> Result<PathBuf, RouteError> {
    let request = Request::builder()
        .uri(route)
        .body(Body::empty())
        .map_err(|e| RouteError::Request(e.to_string()))?;

    let response = router
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|never| match never {});

    let status = response.status();
    if status != StatusCode::OK && status != StatusCode::NOT_FOUND {
        return Err(RouteError::UnexpectedStatus(status));
    }

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .map_err(|e| RouteError::Body(e.to_string()))?;
    let html = String::from_utf8(body.to_vec()).map_err(|_| RouteError::NotUtf8)?;

    fs::write(target, rewriter.rewrite(&html)).map_err(|e| RouteError::Write {
        path: target.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(target.to_path_buf())
}
