//! Static asset mirroring.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::freezer::FreezeError;

/// Counts of the files copied into the output tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetSummary {
    pub files: usize,
    pub css: usize,
    pub js: usize,
}

/// Mirror `source` into `dest`, keeping the directory structure and
/// overwriting files that already exist.
///
/// Returns `Ok(None)` without touching `dest` when `source` does not exist.
pub fn copy_static_assets(source: &Path, dest: &Path) -> Result<Option<AssetSummary>, FreezeError> {
    if !source.exists() {
        tracing::debug!("No static assets at {}", source.display());
        return Ok(None);
    }

    tracing::info!("Copying static assets...");

    let mut summary = AssetSummary::default();

    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| FreezeError::AssetCopy(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| FreezeError::AssetCopy(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                FreezeError::AssetCopy(format!("{}: {}", target.display(), e))
            })?;
            continue;
        }

        fs::copy(entry.path(), &target).map_err(|e| {
            FreezeError::AssetCopy(format!("{}: {}", entry.path().display(), e))
        })?;

        summary.files += 1;
        match target.extension().and_then(|e| e.to_str()) {
            Some("css") => summary.css += 1,
            Some("js") => summary.js += 1,
            _ => {}
        }
    }

    tracing::info!("Copied static assets to {}", dest.display());
    tracing::info!("  - CSS files: {}", summary.css);
    tracing::info!("  - JS files: {}", summary.js);

    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn mirrors_directory_tree() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("static");
        fs::create_dir_all(source.join("css")).unwrap();
        fs::create_dir_all(source.join("js/vendor")).unwrap();
        fs::write(source.join("css/style.css"), "body {}").unwrap();
        fs::write(source.join("js/main.js"), "// main").unwrap();
        fs::write(source.join("js/vendor/lib.js"), "// lib").unwrap();
        fs::write(source.join("favicon.ico"), [0u8, 1, 2]).unwrap();

        let dest = temp.path().join("out/static");
        let summary = copy_static_assets(&source, &dest).unwrap().unwrap();

        assert_eq!(
            summary,
            AssetSummary {
                files: 4,
                css: 1,
                js: 2
            }
        );
        assert_eq!(fs::read_to_string(dest.join("css/style.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dest.join("js/vendor/lib.js")).unwrap(), "// lib");
        assert_eq!(fs::read(dest.join("favicon.ico")).unwrap(), vec![0u8, 1, 2]);
    }

    #[test]
    fn overwrites_existing_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("static");
        fs::create_dir_all(&source).unwrap();
        fs::write(source.join("app.js"), "new").unwrap();

        let dest = temp.path().join("dest");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("app.js"), "old").unwrap();

        copy_static_assets(&source, &dest).unwrap();
        assert_eq!(fs::read_to_string(dest.join("app.js")).unwrap(), "new");
    }

    #[test]
    fn missing_source_is_skipped() {
        let temp = tempdir().unwrap();
        let dest = temp.path().join("dest");

        let summary = copy_static_assets(&temp.path().join("nope"), &dest).unwrap();
        assert_eq!(summary, None);
        assert!(!dest.exists());
    }
}
