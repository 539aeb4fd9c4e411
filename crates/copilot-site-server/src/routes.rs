//! Route table and request handlers.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use copilot_site_content::{get_examples, get_resources, get_tutorials, integration_guide};

use crate::config::SiteConfig;
use crate::error::{ErrorPage, INTERNAL_ERROR_FALLBACK, NOT_FOUND_FALLBACK};
use crate::templates::{PageContext, TemplateEngine};

/// A page of the site: where it is served, how it is rendered, and the file
/// it is frozen to.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// URL path
    pub path: &'static str,
    /// Template rendered for this page
    pub template: &'static str,
    /// File name when frozen to disk
    pub output: &'static str,
    /// Builds the template context
    pub handler: fn() -> PageContext,
}

/// Every page the site serves, in navigation order.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        template: "home.html",
        output: "index.html",
        handler: home,
    },
    Route {
        path: "/resources",
        template: "resources.html",
        output: "resources.html",
        handler: resources,
    },
    Route {
        path: "/examples",
        template: "examples.html",
        output: "examples.html",
        handler: examples,
    },
    Route {
        path: "/about",
        template: "about.html",
        output: "about.html",
        handler: about,
    },
    Route {
        path: "/author",
        template: "author.html",
        output: "author.html",
        handler: author,
    },
    Route {
        path: "/tutorials",
        template: "tutorials.html",
        output: "tutorials.html",
        handler: tutorials,
    },
    Route {
        path: "/copilot-integration",
        template: "copilot-integration.html",
        output: "copilot-integration.html",
        handler: copilot_integration,
    },
];

fn home() -> PageContext {
    PageContext::new("GitHub Copilot Demo", "home")
}

fn resources() -> PageContext {
    PageContext {
        resources: Some(get_resources()),
        ..PageContext::new("Learning Resources", "resources")
    }
}

fn examples() -> PageContext {
    PageContext {
        examples: Some(get_examples()),
        ..PageContext::new("Copilot Examples", "examples")
    }
}

fn about() -> PageContext {
    PageContext::new("About This Project", "about")
}

fn author() -> PageContext {
    PageContext::new("About the Author", "author")
}

fn tutorials() -> PageContext {
    PageContext {
        tutorials: Some(get_tutorials()),
        ..PageContext::new("Copilot Tutorials", "tutorials")
    }
}

fn copilot_integration() -> PageContext {
    PageContext {
        guide: Some(integration_guide()),
        ..PageContext::new("Copilot Integration Guide", "copilot-integration")
    }
}

/// Shared, read-only router state.
struct AppState {
    config: SiteConfig,
    templates: TemplateEngine,
}

impl AppState {
    fn render_route(&self, route: &Route) -> Result<Html<String>, ErrorPage> {
        let context = (route.handler)();

        self.templates
            .render(route.template, &context)
            .map(Html)
            .map_err(|e| {
                tracing::error!("Failed to render {}: {}", route.path, e);
                self.internal_error(&e.to_string())
            })
    }

    fn not_found(&self) -> ErrorPage {
        let html = self
            .templates
            .render("404.html", &PageContext::new("Page Not Found", ""))
            .unwrap_or_else(|e| {
                tracing::error!("Failed to render 404 page: {}", e);
                NOT_FOUND_FALLBACK.to_string()
            });

        ErrorPage {
            status: StatusCode::NOT_FOUND,
            html,
        }
    }

    fn internal_error(&self, detail: &str) -> ErrorPage {
        let context = PageContext {
            error_detail: self.config.debug.then(|| detail.to_string()),
            ..PageContext::new("Server Error", "")
        };

        let html = self
            .templates
            .render("500.html", &context)
            .unwrap_or_else(|_| INTERNAL_ERROR_FALLBACK.to_string());

        ErrorPage {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            html,
        }
    }
}

/// Build the site router.
///
/// Each entry of [`ROUTES`] is bound to a GET handler, `/static` is served
/// from `config.static_dir`, unmatched paths get the 404 page and failing or
/// panicking handlers get the 500 page.
pub fn app(config: SiteConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState {
        config,
        templates: TemplateEngine::new(),
    });

    let mut router = Router::new();
    for route in ROUTES {
        router = router.route(
            route.path,
            get(move |State(state): State<Arc<AppState>>| async move {
                state.render_route(route)
            }),
        );
    }

    router
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(panic_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found_handler(State(state): State<Arc<AppState>>) -> ErrorPage {
    state.not_found()
}

fn panic_page(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Handler panicked: {}", detail);

    let html = TemplateEngine::new()
        .render("500.html", &PageContext::new("Server Error", ""))
        .unwrap_or_else(|_| INTERNAL_ERROR_FALLBACK.to_string());

    ErrorPage {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        html,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    async fn fetch(router: Router, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn every_route_renders_its_title() {
        let expected = [
            ("/", "GitHub Copilot Demo"),
            ("/resources", "Learning Resources"),
            ("/examples", "Copilot Examples"),
            ("/about", "About This Project"),
            ("/author", "About the Author"),
            ("/tutorials", "Copilot Tutorials"),
            ("/copilot-integration", "Copilot Integration Guide"),
        ];
        assert_eq!(expected.len(), ROUTES.len());

        for (path, title) in expected {
            let (status, body) = fetch(app(SiteConfig::default()), path).await;
            assert_eq!(status, StatusCode::OK, "{}", path);
            assert!(body.contains(title), "{} is missing {:?}", path, title);
        }
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        for path in ["/nonexistent", "/this-route-does-not-exist", "/404"] {
            let (status, body) = fetch(app(SiteConfig::default()), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(body.contains("404"));
            assert!(body.contains("Page Not Found"));
            assert!(body.contains(r#"href="/""#));
        }
    }

    #[tokio::test]
    async fn home_has_navigation() {
        let (_, body) = fetch(app(SiteConfig::default()), "/").await;
        assert!(body.contains("Resources"));
        assert!(body.contains("Examples"));
        assert!(body.contains("About"));
        assert!(body.contains(r#"href="/static/css/style.css""#));
    }

    #[tokio::test]
    async fn resources_page_lists_links() {
        let (status, body) = fetch(app(SiteConfig::default()), "/resources").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("docs.github.com"));
        assert!(body.contains("Official Docs"));
        assert!(body.contains("https://github.com/github/awesome-copilot"));
    }

    #[tokio::test]
    async fn examples_page_lists_features() {
        let (_, body) = fetch(app(SiteConfig::default()), "/examples").await;
        assert!(body.contains("Code Completion"));
        assert!(body.to_lowercase().contains("feature"));
    }

    #[tokio::test]
    async fn serves_static_files() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("css")).unwrap();
        fs::write(temp.path().join("css/style.css"), "body { margin: 0; }").unwrap();

        let config = SiteConfig {
            static_dir: temp.path().to_path_buf(),
            ..Default::default()
        };

        let (status, body) = fetch(app(config), "/static/css/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body { margin: 0; }");
    }

    fn state(debug: bool) -> AppState {
        AppState {
            config: SiteConfig {
                debug,
                ..Default::default()
            },
            templates: TemplateEngine::new(),
        }
    }

    fn broken_page() -> PageContext {
        PageContext::new("Broken", "")
    }

    #[test]
    fn render_failure_is_internal_error() {
        let route = Route {
            path: "/broken",
            template: "broken.html",
            output: "broken.html",
            handler: broken_page,
        };

        let page = state(false).render_route(&route).unwrap_err();
        assert_eq!(page.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(page.html.contains("500"));
        assert!(!page.html.contains("broken.html"));
    }

    #[test]
    fn debug_mode_shows_error_detail() {
        let route = Route {
            path: "/broken",
            template: "broken.html",
            output: "broken.html",
            handler: broken_page,
        };

        let page = state(true).render_route(&route).unwrap_err();
        assert!(page.html.contains("Template not found: broken.html"));
    }

    #[tokio::test]
    async fn panics_become_internal_errors() {
        async fn explode() -> &'static str {
            panic!("handler exploded")
        }

        let router = Router::new()
            .route("/explode", axum::routing::get(explode))
            .layer(CatchPanicLayer::custom(panic_page));

        let (status, body) = fetch(router, "/explode").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("500"));
    }
}
