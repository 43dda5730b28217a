use crate::assets::AssetSpec;
use crate::color::Palette;
use crate::config::FontConfig;
use anyhow::{Context, Result};
use image::DynamicImage;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Cargo feature that provides the drawing and font rendering backend
pub const DRAW_FEATURE: &str = "draw";

/// The drawing backend was compiled out of this build
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("drawing backend unavailable: brandgen was built without the `{feature}` feature")]
pub struct MissingDependency {
    pub feature: &'static str,
}

impl MissingDependency {
    /// Command that rebuilds brandgen with the backend enabled
    pub fn remediation(&self) -> Vec<String> {
        vec![
            "install".to_string(),
            "--path".to_string(),
            env!("CARGO_MANIFEST_DIR").to_string(),
            "--features".to_string(),
            self.feature.to_string(),
        ]
    }
}

/// Where the label font of an asset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Preferred(PathBuf),
    Fallback(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Preferred(path) => write!(f, "{}", path.display()),
            FontSource::Fallback(path) => write!(f, "{} (fallback)", path.display()),
            FontSource::Builtin => f.write_str("built-in bitmap font"),
        }
    }
}

/// A rendered canvas, ready to encode
pub struct Rendered {
    pub image: DynamicImage,
    pub font: FontSource,
}

/// Draws one asset onto a fresh canvas
pub trait Rasterizer {
    fn rasterize(&self, asset: &AssetSpec, palette: &Palette) -> Result<Rendered>;
}

/// Best-effort fix for a missing backend
pub trait Installer {
    fn install(&self, missing: &MissingDependency) -> Result<()>;
}

/// Reinstalls brandgen through cargo with the missing feature turned on
pub struct CargoInstaller;

impl Installer for CargoInstaller {
    fn install(&self, missing: &MissingDependency) -> Result<()> {
        let status = Command::new("cargo")
            .args(missing.remediation())
            .status()
            .context("Failed to execute cargo")?;

        if !status.success() {
            anyhow::bail!("cargo install exited with {}", status);
        }

        Ok(())
    }
}

/// Skips remediation (`--no-install`)
pub struct NoopInstaller;

impl Installer for NoopInstaller {
    fn install(&self, _missing: &MissingDependency) -> Result<()> {
        Ok(())
    }
}

#[cfg(feature = "draw")]
pub fn probe(fonts: &FontConfig) -> Result<Box<dyn Rasterizer>, MissingDependency> {
    Ok(Box::new(crate::render::ImageRasterizer::new(fonts)))
}

#[cfg(not(feature = "draw"))]
pub fn probe(_fonts: &FontConfig) -> Result<Box<dyn Rasterizer>, MissingDependency> {
    Err(MissingDependency {
        feature: DRAW_FEATURE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remediation_enables_feature() {
        let missing = MissingDependency {
            feature: DRAW_FEATURE,
        };
        let args = missing.remediation();
        assert_eq!(args[0], "install");
        assert_eq!(args[args.len() - 2..], ["--features", "draw"]);
        assert!(missing.to_string().contains("`draw`"));
    }

    #[test]
    fn test_font_source_display() {
        assert_eq!(FontSource::Builtin.to_string(), "built-in bitmap font");
        assert_eq!(
            FontSource::Fallback(PathBuf::from("/f.ttf")).to_string(),
            "/f.ttf (fallback)"
        );
    }

    #[cfg(feature = "draw")]
    #[test]
    fn test_probe_finds_backend() {
        assert!(probe(&FontConfig::default()).is_ok());
    }
}
