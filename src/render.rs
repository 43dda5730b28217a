use crate::assets::{AssetSpec, ColorMode};
use crate::backend::{Rasterizer, Rendered};
use crate::bitmap_font;
use crate::color::{Color, Palette};
use crate::config::FontConfig;
use crate::fonts::{em_scale, FontCache, ResolvedFont};
use ab_glyph::{Font, ScaleFont};
use anyhow::Result;
use image::{DynamicImage, ImageBuffer, Pixel, Rgb, Rgba};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

/// Pixel types a brand canvas can be allocated with
pub trait BrandPixel: Pixel<Subpixel = u8> + 'static {
    fn from_color(color: Color) -> Self;
}

impl BrandPixel for Rgb<u8> {
    fn from_color(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl BrandPixel for Rgba<u8> {
    fn from_color(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

type Canvas<P> = ImageBuffer<P, Vec<u8>>;

/// imageproc + ab_glyph backend
pub struct ImageRasterizer {
    fonts: FontCache,
}

impl ImageRasterizer {
    pub fn new(config: &FontConfig) -> Self {
        ImageRasterizer {
            fonts: FontCache::new(config),
        }
    }
}

impl Rasterizer for ImageRasterizer {
    fn rasterize(&self, asset: &AssetSpec, palette: &Palette) -> Result<Rendered> {
        let font = self.fonts.get();

        let image = match asset.mode {
            ColorMode::Rgb => DynamicImage::ImageRgb8(paint::<Rgb<u8>>(asset, palette, font)),
            ColorMode::Rgba => DynamicImage::ImageRgba8(paint::<Rgba<u8>>(asset, palette, font)),
        };

        Ok(Rendered {
            image,
            font: font.source(),
        })
    }
}

fn paint<P: BrandPixel>(asset: &AssetSpec, palette: &Palette, font: &ResolvedFont) -> Canvas<P> {
    let background = P::from_color(asset.background_color(palette));
    let mut canvas = ImageBuffer::from_pixel(asset.width, asset.height, background);

    if let Some(circle) = asset.circle {
        let (rx, ry) = circle.radii();
        draw_filled_ellipse_mut(&mut canvas, circle.center(), rx, ry, P::from_color(palette.white));
    }

    let color = P::from_color(asset.label_color(palette));
    let (cx, cy) = asset.center();
    let text = asset.label.text.as_str();

    match font {
        ResolvedFont::Outline { font, .. } => {
            draw_centered_text(&mut canvas, color, (cx, cy), asset.label.font_size, font, text)
        }
        ResolvedFont::Builtin => {
            draw_centered_bitmap_text(&mut canvas, color, (cx, cy), asset.label.font_size, text)
        }
    }

    canvas
}

/// Center horizontally on the advance width and vertically between ascender
/// and descender.
fn draw_centered_text<P: BrandPixel>(
    canvas: &mut Canvas<P>,
    color: P,
    (cx, cy): (f32, f32),
    em_px: f32,
    font: &impl Font,
    text: &str,
) {
    let scale = em_scale(font, em_px);
    let scaled = font.as_scaled(scale);
    let (width, _) = text_size(scale, font, text);
    let line_height = scaled.ascent() - scaled.descent();

    let x = (cx - width as f32 / 2.0).round() as i32;
    let y = (cy - line_height / 2.0).round() as i32;
    draw_text_mut(canvas, color, x, y, scale, font, text);
}

fn draw_centered_bitmap_text<P: BrandPixel>(
    canvas: &mut Canvas<P>,
    color: P,
    (cx, cy): (f32, f32),
    em_px: f32,
    text: &str,
) {
    let dot = bitmap_font::dot_size(em_px);
    let (cols, rows) = bitmap_font::grid_size(text);
    let left = (cx - (cols * dot) as f32 / 2.0).round() as i32;
    let top = (cy - (rows * dot) as f32 / 2.0).round() as i32;

    for (col, row) in bitmap_font::lit_cells(text) {
        let rect = Rect::at(left + (col * dot) as i32, top + (row * dot) as i32).of_size(dot, dot);
        draw_filled_rect_mut(canvas, rect, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{catalogue, AssetKind};
    use crate::config::BrandConfig;

    const BRAND: Color = Color::rgb(79, 70, 229);

    fn builtin_rasterizer() -> ImageRasterizer {
        ImageRasterizer::new(&FontConfig {
            preferred: "/nonexistent/brandgen/font.ttf".into(),
            fallbacks: Vec::new(),
            system_search: false,
        })
    }

    fn asset(kind: AssetKind) -> AssetSpec {
        catalogue(&BrandConfig::default())
            .into_iter()
            .find(|a| a.kind == kind)
            .unwrap()
    }

    #[test]
    fn test_icon_canvas_layout() {
        let rendered = builtin_rasterizer()
            .rasterize(&asset(AssetKind::Icon), &Palette::new(BRAND))
            .unwrap();
        let img = rendered.image.to_rgb8();

        assert_eq!(img.dimensions(), (1024, 1024));
        // Corners keep the brand background
        assert_eq!(*img.get_pixel(0, 0), Rgb([79, 70, 229]));
        assert_eq!(*img.get_pixel(1023, 1023), Rgb([79, 70, 229]));
        // Inside the circle but away from the label
        assert_eq!(*img.get_pixel(512, 330), Rgb([255, 255, 255]));
        // Just outside the circle
        assert_eq!(*img.get_pixel(512, 300), Rgb([79, 70, 229]));
        assert_eq!(rendered.font, crate::backend::FontSource::Builtin);
    }

    #[test]
    fn test_bitmap_label_is_centered() {
        let rendered = builtin_rasterizer()
            .rasterize(&asset(AssetKind::Icon), &Palette::new(BRAND))
            .unwrap();
        let img = rendered.image.to_rgb8();

        // "MB" at 20px dots spans 220x140 around the center
        assert_eq!(*img.get_pixel(403, 443), Rgb([79, 70, 229]));
        assert_eq!(*img.get_pixel(620, 580), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(401, 512), Rgb([255, 255, 255]));
        // Gap column between the two glyphs
        assert_eq!(*img.get_pixel(512, 512), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_notification_background_is_transparent() {
        let rendered = builtin_rasterizer()
            .rasterize(&asset(AssetKind::NotificationIcon), &Palette::new(BRAND))
            .unwrap();
        let DynamicImage::ImageRgba8(img) = rendered.image else {
            panic!("notification icon must carry an alpha channel");
        };

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(95, 95)[3], 0);
        assert_eq!(*img.get_pixel(48, 20), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_splash_has_white_text_on_brand() {
        let rendered = builtin_rasterizer()
            .rasterize(&asset(AssetKind::Splash), &Palette::new(BRAND))
            .unwrap();
        assert!(matches!(rendered.image, DynamicImage::ImageRgb8(_)));
        let img = rendered.image.to_rgb8();

        assert_eq!(img.dimensions(), (1284, 2778));
        assert_eq!(*img.get_pixel(642, 100), Rgb([79, 70, 229]));
        let white = img
            .pixels()
            .filter(|p| **p == Rgb([255, 255, 255]))
            .count();
        assert!(white > 0);
    }
}
