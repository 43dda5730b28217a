use crate::color::{Color, Palette};
use crate::constants;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BrandConfig {
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_monogram")]
    pub monogram: String,
    #[serde(default = "default_initial")]
    pub initial: String,
}

fn default_primary_color() -> String {
    constants::brand::PRIMARY_HEX.to_string()
}

fn default_app_name() -> String {
    constants::brand::APP_NAME.to_string()
}

fn default_monogram() -> String {
    constants::brand::MONOGRAM.to_string()
}

fn default_initial() -> String {
    constants::brand::INITIAL.to_string()
}

impl Default for BrandConfig {
    fn default() -> Self {
        BrandConfig {
            primary_color: default_primary_color(),
            app_name: default_app_name(),
            monogram: default_monogram(),
            initial: default_initial(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(constants::output::DEFAULT_DIR)
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontConfig {
    #[serde(default = "default_preferred_font")]
    pub preferred: PathBuf,
    /// Tried in order after the preferred font
    #[serde(default)]
    pub fallbacks: Vec<PathBuf>,
    /// Also look in the user font directory and well-known system locations
    #[serde(default = "default_system_search")]
    pub system_search: bool,
}

fn default_preferred_font() -> PathBuf {
    PathBuf::from(constants::fonts::PREFERRED_PATH)
}

fn default_system_search() -> bool {
    true
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            preferred: default_preferred_font(),
            fallbacks: Vec::new(),
            system_search: default_system_search(),
        }
    }
}

impl FontConfig {
    /// Every font file worth trying, preferred first, without duplicates
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = vec![self.preferred.clone()];
        paths.extend(self.fallbacks.iter().cloned());

        if self.system_search {
            if let Some(font_dir) = dirs::font_dir() {
                paths.extend(
                    constants::fonts::USER_FONT_NAMES
                        .iter()
                        .map(|name| font_dir.join(name)),
                );
            }
            paths.extend(
                constants::fonts::SYSTEM_FONT_PATHS
                    .iter()
                    .map(PathBuf::from),
            );
        }

        let mut seen = Vec::with_capacity(paths.len());
        paths.retain(|path| {
            if seen.contains(path) {
                false
            } else {
                seen.push(path.clone());
                true
            }
        });
        paths
    }
}

impl Config {
    /// Load the config from an explicit path, or from `brandgen.yaml` in the
    /// working directory if it exists, or fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Path::new(constants::config::DEFAULT_FILE);
                if default_path.exists() {
                    Self::load_from(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.brand
            .primary_color
            .parse::<Color>()
            .context("brand.primary_color is not a valid color")?;

        if self.brand.app_name.trim().is_empty() {
            bail!("brand.app_name cannot be empty");
        }
        if self.brand.monogram.trim().is_empty() {
            bail!("brand.monogram cannot be empty");
        }
        if self.brand.initial.trim().is_empty() {
            bail!("brand.initial cannot be empty");
        }

        if self.output.dir.as_os_str().is_empty() {
            bail!("output.dir cannot be empty");
        }

        if self.fonts.preferred.as_os_str().is_empty() {
            bail!("fonts.preferred cannot be empty");
        }

        Ok(())
    }

    pub fn palette(&self) -> Result<Palette> {
        let brand = self
            .brand
            .primary_color
            .parse::<Color>()
            .context("brand.primary_color is not a valid color")?;
        Ok(Palette::new(brand))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let yaml = serde_yaml::to_string(self)
            .context("Failed to serialize config")?;

        fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_brand() {
        let config = Config::default();
        assert_eq!(config.brand.primary_color, "#4F46E5");
        assert_eq!(config.brand.app_name, "MindBudget");
        assert_eq!(config.output.dir, PathBuf::from("assets"));
        assert_eq!(
            config.fonts.preferred,
            PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf")
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.palette().unwrap().brand, Color::rgb(79, 70, 229));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = Config::from_yaml("brand:\n  app_name: Budgetly\n").unwrap();
        assert_eq!(config.brand.app_name, "Budgetly");
        assert_eq!(config.brand.monogram, "MB");
        assert_eq!(config.output.dir, PathBuf::from("assets"));
        assert!(config.fonts.system_search);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.brand.initial, "M");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(Config::from_yaml("brand:\n  primary_color: purple\n").is_err());
        assert!(Config::from_yaml("brand:\n  monogram: \"  \"\n").is_err());
        assert!(Config::from_yaml("output:\n  dir: \"\"\n").is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brandgen.yaml");

        let mut config = Config::default();
        config.brand.primary_color = "#1FA672".to_string();
        config.fonts.fallbacks.push(PathBuf::from("/opt/fonts/Bold.ttf"));
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.brand.primary_color, "#1FA672");
        assert_eq!(loaded.fonts.fallbacks, vec![PathBuf::from("/opt/fonts/Bold.ttf")]);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("nope.yaml"))).is_err());
    }

    #[test]
    fn test_font_candidates_order() {
        let fonts = FontConfig {
            preferred: PathBuf::from("/a.ttf"),
            fallbacks: vec![PathBuf::from("/b.ttf"), PathBuf::from("/a.ttf")],
            system_search: false,
        };
        assert_eq!(
            fonts.candidates(),
            vec![PathBuf::from("/a.ttf"), PathBuf::from("/b.ttf")]
        );

        let searching = FontConfig {
            system_search: true,
            ..fonts
        };
        let candidates = searching.candidates();
        assert_eq!(candidates[0], PathBuf::from("/a.ttf"));
        assert!(candidates.len() > 2);
    }
}
