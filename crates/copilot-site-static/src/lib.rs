//! Static freezer for the Copilot demo site.
//!
//! Renders every route of the site router in-process, rewrites root-relative
//! links for static hosting, and mirrors the asset directory next to the pages.

pub mod assets;
pub mod freezer;
pub mod rewrite;

pub use assets::{copy_static_assets, AssetSummary};
pub use freezer::{
    frozen_routes, FreezeConfig, FreezeError, FreezeReport, Freezer, RouteError, SkippedRoute,
};
pub use rewrite::{update_asset_paths, LinkRewriter};
