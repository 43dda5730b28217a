use anyhow::{Result, bail};
use brandgen::assets::{catalogue, ColorMode};
use brandgen::backend::{CargoInstaller, Installer, NoopInstaller};
use brandgen::config::Config;
use brandgen::generator::{Generator, Outcome};
use brandgen::verify;
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "brandgen")]
#[command(about = "Generate the MindBudget PNG branding assets", long_about = None)]
struct Cli {
    /// YAML config file. Defaults to ./brandgen.yaml when it exists
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw all four assets (the default when no command is given)
    Generate(GenerateArgs),
    /// Show the assets that will be generated
    List,
    /// Check that generated files have the expected size and color mode
    Verify {
        /// Directory holding the generated assets
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Write the default configuration to a file
    InitConfig {
        #[arg(default_value = brandgen::constants::config::DEFAULT_FILE)]
        path: PathBuf,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Directory the PNG files are written to
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// TrueType font to use instead of the configured one
    #[arg(short, long)]
    font: Option<PathBuf>,
    /// Create the output directory if it does not exist
    #[arg(long)]
    create_dir: bool,
    /// Do not try to install a missing drawing backend
    #[arg(long)]
    no_install: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => {
            let config = Config::load(cli.config.as_deref())?;
            generate_command(config, args)
        }
        Commands::List => {
            let config = Config::load(cli.config.as_deref())?;
            list_command(&config)
        }
        Commands::Verify { out_dir } => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(out_dir) = out_dir {
                config.output.dir = out_dir;
            }
            verify_command(&config)
        }
        Commands::InitConfig { path } => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            Config::default().save(&path)?;
            println!("Created default config at: {}", path.display());
            Ok(())
        }
    }
}

fn generate_command(mut config: Config, args: GenerateArgs) -> Result<()> {
    if let Some(out_dir) = args.out_dir {
        config.output.dir = out_dir;
    }
    if let Some(font) = args.font {
        config.fonts.preferred = font;
    }
    config.validate()?;

    let installer: &dyn Installer = if args.no_install {
        &NoopInstaller
    } else {
        &CargoInstaller
    };

    let generator = Generator::new(config).create_dir(args.create_dir);

    // A missing backend is reported by the generator and is not a failure
    match generator.run(installer, &mut io::stdout())? {
        Outcome::Generated(_) | Outcome::RerunRequired(_) => Ok(()),
    }
}

fn list_command(config: &Config) -> Result<()> {
    println!("Assets written to {}:", config.output.dir.display());
    println!();

    for asset in catalogue(&config.brand) {
        let mode = match asset.mode {
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        println!(
            "  {:<24} {:>4}x{:<4}  {:<4}  {:<18} \"{}\"",
            asset.file_name, asset.width, asset.height, mode, asset.kind, asset.label.text
        );
    }

    Ok(())
}

fn verify_command(config: &Config) -> Result<()> {
    let assets = catalogue(&config.brand);
    let findings = verify::check_dir(&config.output.dir, &assets);

    for asset in &assets {
        let path = config.output.dir.join(asset.file_name);
        match findings.iter().find(|f| f.path == path) {
            Some(finding) => eprintln!("❌ {}", finding),
            None => println!("✓ {}", path.display()),
        }
    }

    if !findings.is_empty() {
        bail!("{} of {} assets failed verification", findings.len(), assets.len());
    }

    Ok(())
}
