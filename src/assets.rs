//! The fixed catalogue of branding assets and the shape of each one.

use crate::color::{Color, Palette};
use crate::config::BrandConfig;
use crate::constants::output;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Icon,
    AdaptiveIcon,
    Splash,
    NotificationIcon,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Icon => "app icon",
            AssetKind::AdaptiveIcon => "adaptive icon",
            AssetKind::Splash => "splash screen",
            AssetKind::NotificationIcon => "notification icon",
        };
        f.pad(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Opaque RGB
    Rgb,
    /// RGB with an alpha channel
    Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Brand,
    Transparent,
}

/// Inclusive pixel bounds of a filled ellipse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Ellipse {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Ellipse { left, top, right, bottom }
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Horizontal and vertical radius
    pub fn radii(&self) -> (i32, i32) {
        ((self.right - self.left) / 2, (self.bottom - self.top) / 2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Brand,
    White,
}

/// Text drawn centered on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub color: LabelColor,
    /// Em size in pixels
    pub font_size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetSpec {
    pub kind: AssetKind,
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub mode: ColorMode,
    pub background: Background,
    pub circle: Option<Ellipse>,
    pub label: Label,
}

impl AssetSpec {
    pub fn background_color(&self, palette: &Palette) -> Color {
        match self.background {
            Background::Brand => palette.brand,
            Background::Transparent => Color::TRANSPARENT,
        }
    }

    pub fn label_color(&self, palette: &Palette) -> Color {
        match self.label.color {
            LabelColor::Brand => palette.brand,
            LabelColor::White => palette.white,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// The four assets, in generation order
pub fn catalogue(brand: &BrandConfig) -> Vec<AssetSpec> {
    vec![
        AssetSpec {
            kind: AssetKind::Icon,
            file_name: output::ICON,
            width: 1024,
            height: 1024,
            mode: ColorMode::Rgb,
            background: Background::Brand,
            circle: Some(Ellipse::new(312, 312, 712, 712)),
            label: Label {
                text: brand.monogram.clone(),
                color: LabelColor::Brand,
                font_size: 200.0,
            },
        },
        AssetSpec {
            kind: AssetKind::AdaptiveIcon,
            file_name: output::ADAPTIVE_ICON,
            width: 1024,
            height: 1024,
            mode: ColorMode::Rgb,
            background: Background::Brand,
            circle: Some(Ellipse::new(256, 256, 768, 768)),
            label: Label {
                text: brand.monogram.clone(),
                color: LabelColor::Brand,
                font_size: 200.0,
            },
        },
        AssetSpec {
            kind: AssetKind::Splash,
            file_name: output::SPLASH,
            width: 1284,
            height: 2778,
            mode: ColorMode::Rgb,
            background: Background::Brand,
            circle: None,
            label: Label {
                text: brand.app_name.clone(),
                color: LabelColor::White,
                font_size: 150.0,
            },
        },
        AssetSpec {
            kind: AssetKind::NotificationIcon,
            file_name: output::NOTIFICATION_ICON,
            width: 96,
            height: 96,
            mode: ColorMode::Rgba,
            background: Background::Transparent,
            circle: Some(Ellipse::new(16, 16, 80, 80)),
            label: Label {
                text: brand.initial.clone(),
                color: LabelColor::Brand,
                font_size: 36.0,
            },
        },
    ]
}
