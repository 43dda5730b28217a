use crate::assets::{catalogue, AssetKind};
use crate::backend::{self, FontSource, Installer, MissingDependency, Rasterizer};
use crate::config::Config;
use anyhow::{Context, Result, bail};
use image::ImageFormat;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub font: FontSource,
}

#[derive(Debug)]
pub enum Outcome {
    Generated(Vec<GeneratedAsset>),
    /// Nothing was written; the user has to run brandgen again
    RerunRequired(MissingDependency),
}

pub struct Generator {
    config: Config,
    create_dir: bool,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Generator {
            config,
            create_dir: false,
        }
    }

    /// Create the output directory instead of failing when it is missing
    pub fn create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, installer: &dyn Installer, out: &mut dyn Write) -> Result<Outcome> {
        self.run_with(backend::probe(&self.config.fonts), installer, out)
    }

    pub fn run_with(
        &self,
        backend: Result<Box<dyn Rasterizer>, MissingDependency>,
        installer: &dyn Installer,
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        let rasterizer = match backend {
            Ok(rasterizer) => rasterizer,
            Err(missing) => {
                self.remediate(&missing, installer, out)?;
                return Ok(Outcome::RerunRequired(missing));
            }
        };

        let palette = self.config.palette()?;
        let out_dir = &self.config.output.dir;

        if !out_dir.is_dir() {
            if self.create_dir {
                fs::create_dir_all(out_dir).with_context(|| {
                    format!("Failed to create output directory {}", out_dir.display())
                })?;
            } else {
                bail!(
                    "Output directory {} does not exist (use --create-dir to create it)",
                    out_dir.display()
                );
            }
        }

        let mut generated = Vec::new();

        for asset in catalogue(&self.config.brand) {
            let rendered = rasterizer
                .rasterize(&asset, &palette)
                .with_context(|| format!("Failed to draw {}", asset.kind))?;

            let path = out_dir.join(asset.file_name);
            rendered
                .image
                .save_with_format(&path, ImageFormat::Png)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            writeln!(out, "✅ {} created", asset.file_name)?;

            generated.push(GeneratedAsset {
                kind: asset.kind,
                path,
                font: rendered.font,
            });
        }

        writeln!(out, "\n🎉 All assets were generated successfully!")?;

        Ok(Outcome::Generated(generated))
    }

    fn remediate(
        &self,
        missing: &MissingDependency,
        installer: &dyn Installer,
        out: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "❌ {}", missing)?;
        writeln!(out, "Installing the drawing backend...")?;

        if let Err(e) = installer.install(missing) {
            writeln!(out, "⚠️  Automatic installation failed: {:#}", e)?;
            writeln!(out, "   Install manually: cargo {}", missing.remediation().join(" "))?;
        }

        writeln!(out, "Run brandgen again once the installation has finished")?;
        Ok(())
    }
}
