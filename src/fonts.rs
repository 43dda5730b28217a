use crate::backend::FontSource;
use crate::config::FontConfig;
use ab_glyph::{Font, FontVec, PxScale};
use anyhow::{Context, Result};
use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

pub enum ResolvedFont {
    Outline { font: FontVec, source: FontSource },
    Builtin,
}

impl ResolvedFont {
    pub fn source(&self) -> FontSource {
        match self {
            ResolvedFont::Outline { source, .. } => source.clone(),
            ResolvedFont::Builtin => FontSource::Builtin,
        }
    }
}

/// Resolves the label font once and hands the same handle to every asset.
pub struct FontCache {
    candidates: Vec<PathBuf>,
    resolved: OnceCell<ResolvedFont>,
}

impl FontCache {
    pub fn new(config: &FontConfig) -> Self {
        FontCache {
            candidates: config.candidates(),
            resolved: OnceCell::new(),
        }
    }

    pub fn get(&self) -> &ResolvedFont {
        self.resolved.get_or_init(|| resolve(&self.candidates))
    }
}

fn resolve(candidates: &[PathBuf]) -> ResolvedFont {
    for (index, path) in candidates.iter().enumerate() {
        // An unreadable or malformed font is not fatal, try the next one
        if let Ok(font) = load_outline(path) {
            let source = if index == 0 {
                FontSource::Preferred(path.clone())
            } else {
                FontSource::Fallback(path.clone())
            };
            return ResolvedFont::Outline { font, source };
        }
    }
    ResolvedFont::Builtin
}

pub fn load_outline(path: &Path) -> Result<FontVec> {
    let data = fs::read(path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    FontVec::try_from_vec(data)
        .with_context(|| format!("Failed to parse font {}", path.display()))
}

/// Pixel scale whose em square is `em_px` pixels tall.
///
/// ab_glyph scales by ascent-to-descent height, other tools size fonts by em.
pub fn em_scale(font: &impl Font, em_px: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(em_px * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(em_px),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_search(preferred: PathBuf) -> FontConfig {
        FontConfig {
            preferred,
            fallbacks: Vec::new(),
            system_search: false,
        }
    }

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FontCache::new(&no_search(dir.path().join("missing.ttf")));
        assert!(matches!(cache.get(), ResolvedFont::Builtin));
        assert_eq!(cache.get().source(), FontSource::Builtin);
    }

    #[test]
    fn test_corrupt_font_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"definitely not a font").unwrap();

        assert!(load_outline(&path).is_err());
        let cache = FontCache::new(&no_search(path));
        assert_eq!(cache.get().source(), FontSource::Builtin);
    }

    #[test]
    fn test_load_outline_reports_path() {
        let err = load_outline(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/font.ttf"));
    }
}
