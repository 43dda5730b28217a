// Library exports for testing
pub mod assets;
pub mod backend;
pub mod bitmap_font;
pub mod color;
pub mod config;
pub mod constants;
pub mod generator;
pub mod verify;

#[cfg(feature = "draw")]
pub mod fonts;
#[cfg(feature = "draw")]
pub mod render;
