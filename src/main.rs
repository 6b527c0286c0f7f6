use clap::{Parser, Subcommand};
use pbxgen::config::{self, Overrides, ProjectConfig};
use pbxgen::generate::{self, GenerateRequest};
use pbxgen::{output, scan};
use std::path::PathBuf;
use std::process::ExitCode;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "pbxgen")]
#[command(about = "Generate an Xcode project bundle from a tree of Swift sources")]
#[command(long_about = "\
Generate an Xcode project bundle from a tree of Swift sources

Every .swift file below the source directory becomes a member of a single
iOS application target. The bundle is written next to the sources:

  MyApp/                           # --output (project directory)
  ├── pbxgen.toml                  # Optional config
  ├── MyApp.xcodeproj/             # Generated (replaced on every run)
  │   ├── project.pbxproj
  │   ├── project.xcworkspace/
  │   └── xcuserdata/
  └── MyApp/                       # Scanned for sources (default)
      ├── App/MyApp.swift
      └── Data/Models/User.swift

Settings resolve as: stock defaults → pbxgen.toml → command line flags.

Run 'pbxgen gen-config' to generate a documented pbxgen.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project directory; the bundle is created here
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    /// Source directory to scan [default: <output>/<name>]
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Project name (overrides project.name)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Config file [default: <output>/pbxgen.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Derive object identifiers from this seed for reproducible output
    #[arg(long, global = true)]
    seed: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct ScanArgs {
    /// Print the discovered files as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Scan sources and write <name>.xcodeproj
    Generate,
    /// List the source files a generate run would include
    Scan(ScanArgs),
    /// Print a stock pbxgen.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Generate => {
            let (project_config, scan_root) = resolve(cli)?;
            let request = GenerateRequest {
                scan_root,
                output_root: cli.output.clone(),
                config: project_config,
            };
            let report = generate::generate(&request)?;
            output::print_generate_output(&report);
        }
        Command::Scan(args) => {
            let (project_config, scan_root) = resolve(cli)?;
            let files = scan::discover(&scan_root, &project_config.sources.extension)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&files)?);
            } else {
                output::print_scan_output(&files, &scan_root);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config stack and pick the scan root: `--source`, else the
/// config's `sources.dir`, else `<output>/<name>`.
fn resolve(cli: &Cli) -> Result<(ProjectConfig, PathBuf), config::ConfigError> {
    let overrides = Overrides {
        name: cli.name.clone(),
        seed: cli.seed.clone(),
    };
    let project_config = config::load_config(cli.config.as_deref(), &cli.output, &overrides)?;
    let scan_root = cli
        .source
        .clone()
        .unwrap_or_else(|| project_config.scan_root(&cli.output));
    Ok((project_config, scan_root))
}
