//! gddoc — generate markdown documentation from tagged GDScript comments.
//!
//! Scans a Godot project for `# PUBLIC` blocks and writes one page per
//! documented script plus an `index.md`:
//!
//! `gddoc --projectfile game/project.godot --outfolder docs/api`

mod config;
mod extract;
mod links;
mod manifest;
mod model;
mod paths;
mod render;
mod scan;
mod scene;
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use config::{DocConfig, LinkMode, SignatureMode};
use paths::Localizer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gddoc",
    about = "Generate markdown documentation from tagged comments in a Godot project"
)]
struct Cli {
    /// The project.godot file; its directory is the project root
    #[arg(long)]
    projectfile: PathBuf,

    /// Folder to write the documentation to (created if missing)
    #[arg(long)]
    outfolder: PathBuf,

    /// Additional path pattern to skip (substring or glob). Repeatable.
    #[arg(long)]
    ignore: Vec<String>,

    /// Comment literal marking a documented block
    #[arg(long, default_value = config::DEFAULT_TAG)]
    tag: String,

    /// Keep every block even when two share the same signature
    #[arg(long)]
    keep_duplicate_signatures: bool,

    /// Link every res:// reference instead of one per delimiter kind
    #[arg(long)]
    resolve_all_links: bool,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn doc_config(&self) -> DocConfig {
        let mut config = DocConfig::default().with_ignores(self.ignore.iter().cloned());
        config.tag = self.tag.clone();
        if self.keep_duplicate_signatures {
            config.signature_mode = SignatureMode::KeepAll;
        }
        if self.resolve_all_links {
            config.link_mode = LinkMode::Exhaustive;
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if cli.tag.is_empty() {
        anyhow::bail!("--tag must not be empty");
    }
    let config = cli.doc_config();

    let project_file = fs::canonicalize(&cli.projectfile).with_context(|| {
        format!("failed to find project file: {}", cli.projectfile.display())
    })?;
    let project_root = project_file
        .parent()
        .context("project file has no parent directory")?
        .to_path_buf();

    fs::create_dir_all(&cli.outfolder).with_context(|| {
        format!("failed to create output directory: {}", cli.outfolder.display())
    })?;
    let out_root = fs::canonicalize(&cli.outfolder)
        .with_context(|| format!("failed to resolve {}", cli.outfolder.display()))?;

    let localizer = Localizer::new(&project_root, &out_root, &config);

    let scripts = scan::scan(localizer.project_root(), &config)?;
    let mut documented = Vec::new();
    for script in scripts {
        if write_script_doc(&script, &localizer)? {
            documented.push(script);
        }
    }

    let aliases = manifest::read_aliases(&project_file, &localizer)?;
    let index = render::index_path(&localizer);
    fs::write(&index, render::render_index(&aliases, &documented, &localizer))
        .with_context(|| format!("failed to write {}", index.display()))?;

    tracing::info!(
        pages = documented.len(),
        autoloads = aliases.len(),
        out = %out_root.display(),
        "documentation generated"
    );
    Ok(())
}

/// Extract and write the page for one script.
///
/// Returns false, writing nothing, when the script has no tagged blocks.
fn write_script_doc(script: &Path, localizer: &Localizer) -> Result<bool> {
    let config = localizer.config();
    let content = fs::read_to_string(script)
        .with_context(|| format!("failed to read {}", script.display()))?;

    let blocks = extract::extract(&content, &config.tag, config.signature_mode);
    if blocks.is_empty() {
        tracing::debug!(script = %script.display(), "no tagged blocks");
        return Ok(false);
    }

    let out_path = localizer.doc_path(script);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let doc = model::ScriptDoc {
        source: script.to_path_buf(),
        blocks,
    };
    fs::write(&out_path, render::render_page(&doc, localizer, &out_path))
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!(page = %out_path.display(), blocks = doc.blocks.len(), "wrote");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn cli_defaults() {
        let cli = parse(&["gddoc", "--projectfile", "project.godot", "--outfolder", "docs"]);
        let config = cli.doc_config();
        assert_eq!(config.tag, DocConfig::default().tag);
        assert_eq!(config.ignores, vec!["modules"]);
        assert_eq!(config.signature_mode, SignatureMode::LastWins);
        assert_eq!(config.link_mode, LinkMode::PerDelimiter);
    }

    #[test]
    fn cli_switches_map_onto_config() {
        let cli = parse(&[
            "gddoc",
            "--projectfile",
            "project.godot",
            "--outfolder",
            "docs",
            "--ignore",
            "addons",
            "--ignore",
            "test/*",
            "--tag",
            "## API",
            "--keep-duplicate-signatures",
            "--resolve-all-links",
        ]);
        let config = cli.doc_config();
        assert_eq!(config.ignores, vec!["modules", "addons", "test/*"]);
        assert_eq!(config.tag, "## API");
        assert_eq!(config.signature_mode, SignatureMode::KeepAll);
        assert_eq!(config.link_mode, LinkMode::Exhaustive);
    }

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["gddoc", "--projectfile", "project.godot"]).is_err());
        assert!(Cli::try_parse_from(["gddoc", "--outfolder", "docs"]).is_err());
    }
}
