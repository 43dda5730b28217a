//! Structural checks on a directory of generated assets.

use crate::assets::{AssetSpec, Background, ColorMode};
use image::{ColorType, DynamicImage, ImageFormat, ImageReader};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    pub problem: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.problem)
    }
}

/// Check every asset in `assets` against the file of the same name in `dir`.
/// Returns one finding per broken file; an empty list means all is well.
pub fn check_dir(dir: &Path, assets: &[AssetSpec]) -> Vec<Finding> {
    assets
        .iter()
        .filter_map(|asset| {
            let path = dir.join(asset.file_name);
            check_file(&path, asset)
                .err()
                .map(|problem| Finding { path, problem })
        })
        .collect()
}

pub fn check_file(path: &Path, asset: &AssetSpec) -> Result<(), String> {
    if !path.is_file() {
        return Err("missing".to_string());
    }

    let image = decode_png(path)?;

    if (image.width(), image.height()) != (asset.width, asset.height) {
        return Err(format!(
            "expected {}x{}, found {}x{}",
            asset.width,
            asset.height,
            image.width(),
            image.height()
        ));
    }

    let expected = match asset.mode {
        ColorMode::Rgb => ColorType::Rgb8,
        ColorMode::Rgba => ColorType::Rgba8,
    };
    if image.color() != expected {
        return Err(format!("expected {:?}, found {:?}", expected, image.color()));
    }

    if asset.background == Background::Transparent {
        check_transparent_corners(&image)?;
    }

    Ok(())
}

fn decode_png(path: &Path) -> Result<DynamicImage, String> {
    let mut reader = ImageReader::open(path).map_err(|e| format!("unreadable: {}", e))?;
    reader.set_format(ImageFormat::Png);
    reader.decode().map_err(|e| format!("not a valid PNG: {}", e))
}

fn check_transparent_corners(image: &DynamicImage) -> Result<(), String> {
    let rgba = image.to_rgba8();
    let (w, h) = rgba.dimensions();
    let corners = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)];

    for (x, y) in corners {
        if rgba.get_pixel(x, y)[3] != 0 {
            return Err(format!("pixel ({}, {}) should be fully transparent", x, y));
        }
    }
    Ok(())
}
