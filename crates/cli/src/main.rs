//! swatch - design token → CSS variables / Tailwind build tool

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swatch_pipeline::{
    build, check_artifacts, discover, find_root_theme, load_documents, write_artifacts, Category,
    Project, Staleness,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(version)]
#[command(about = "Build CSS variables and Tailwind fragments from design tokens", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project root containing the tokens directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to <root>/swatch.config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ProjectArgs {
    fn load(&self) -> Result<Project> {
        let project = Project::load(&self.root, self.config.as_deref())
            .with_context(|| format!("failed to load project at {}", self.root.display()))?;
        tracing::debug!(
            root = %project.root.display(),
            build_path = %project.config.build_path.display(),
            "loaded project"
        );
        Ok(project)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Build every CSS, Tailwind and typography artifact
    Build {
        #[command(flatten)]
        project: ProjectArgs,

        /// Output directory, overrides `buildPath` from the config
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Exit with status 1 if any artifact is missing or stale; writes nothing
        #[arg(long, conflicts_with = "dry_run")]
        check: bool,

        /// Render and list artifacts without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// List discovered token files per category and the root theme
    List {
        #[command(flatten)]
        project: ProjectArgs,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

fn run_build(project: Project, check: bool, dry_run: bool) -> Result<ExitCode> {
    let output = build(&project).context("build failed")?;
    let build_dir = project.build_dir();

    if check {
        let stale = check_artifacts(&build_dir, &output.artifacts)?;
        if stale.is_empty() {
            println!("{} artifacts up to date", output.artifacts.len());
            return Ok(ExitCode::SUCCESS);
        }
        for artifact in &stale {
            let reason = match artifact.reason {
                Staleness::Missing => "missing",
                Staleness::Changed => "stale",
            };
            println!("{}: {}", reason, artifact.destination.display());
        }
        return Ok(ExitCode::from(1));
    }

    if dry_run {
        for artifact in &output.artifacts {
            println!(
                "{} ({}, {} bytes)",
                build_dir.join(&artifact.destination).display(),
                artifact.format,
                artifact.contents.len()
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let report = write_artifacts(&build_dir, &output.artifacts)?;
    println!(
        "✓ {} written, {} unchanged ({})",
        report.written.len(),
        report.unchanged.len(),
        build_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}

fn run_list(project: Project) -> Result<ExitCode> {
    let discovery = discover(&project.root, &project.config.patterns)?;

    for category in Category::ALL {
        let files = discovery.files(category);
        println!("{} ({})", category, files.len());
        for file in files {
            println!("  {}", relative(&project.root, file).display());
        }
    }

    let documents = load_documents(&discovery)?;
    if !documents.themes.is_empty() {
        let root = find_root_theme(&documents.themes, &project.config)?;
        println!(
            "root theme: {} → themes/{}.css",
            relative(&project.root, &documents.themes[root].path).display(),
            project.config.root_theme_output
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Build {
            project,
            out,
            check,
            dry_run,
        } => {
            let mut project = project.load()?;
            if let Some(out) = out {
                project.config.build_path = out;
            }
            run_build(project, check, dry_run)
        }
        Command::List { project } => run_list(project.load()?),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
