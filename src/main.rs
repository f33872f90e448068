//! palettegen — tonal palette and design token generator.
//!
//! Takes one or more seed colors, derives five tonal ramps per seed,
//! names each palette after the nearest entry in a color-name catalog,
//! and writes a CSS custom-property sheet, a light/dark preview page,
//! and a design-system color config.

mod assemble;
mod color;
mod corpus;
mod error;
mod names;
mod palette;
mod ramp;
mod tone;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use crate::error::PaletteError;
use crate::names::NameIndex;
use crate::palette::Palette;

#[derive(Parser, Debug)]
#[command(name = "palettegen", about = "Tonal palette and design token generator")]
struct Cli {
    /// Seed colors: #RRGGBB RRGGBB #RGB RGB #AARRGGBB
    #[arg(required = true)]
    colors: Vec<String>,

    /// Directory artifacts are written to.
    #[arg(long, env = "PALETTEGEN_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Local cache for the color name catalog.
    #[arg(long, env = "PALETTEGEN_CACHE", default_value = "colornames.min.json")]
    cache: PathBuf,

    /// Color name catalog URL.
    #[arg(long, env = "PALETTEGEN_CORPUS_URL", default_value = corpus::DEFAULT_URL)]
    corpus_url: String,

    /// Skip the HTML preview artifact.
    #[arg(long, default_value_t = false)]
    no_html: bool,

    /// Skip the theme config artifact.
    #[arg(long, default_value_t = false)]
    no_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the pipeline. `Ok(false)` means some seeds were rejected but the
/// surviving palettes were still written.
async fn run(cli: Cli) -> Result<bool, PaletteError> {
    let catalog = corpus::load(&cli.cache, &cli.corpus_url).await?;
    let index = NameIndex::build(&catalog)?;
    tracing::info!(entries = index.len(), "name index ready");

    let batch = palette::build_batch(&cli.colors, &index)?;
    for (source, e) in &batch.rejected {
        tracing::warn!(seed = %source, error = %e, "skipping seed");
    }
    for palette in &batch.palettes {
        tracing::debug!(
            source = %palette.source,
            seed = %palette.seed.to_hex(),
            name = %palette.name,
            "palette built"
        );
    }
    if batch.palettes.is_empty() {
        tracing::error!("no valid seed colors; nothing to write");
        return Ok(false);
    }

    report(&batch.palettes);

    // Every artifact renders in memory before the first write, so a
    // write failure cannot leave another artifact half-rendered.
    let artifacts = assemble::assemble(&batch.palettes);

    fs::create_dir_all(&cli.out_dir).map_err(|e| PaletteError::WriteFailed {
        path: cli.out_dir.display().to_string(),
        source: e,
    })?;
    write_artifact(&cli.out_dir.join("palette.css"), &artifacts.css)?;
    if !cli.no_html {
        write_artifact(&cli.out_dir.join("index.html"), &artifacts.html)?;
    }
    if !cli.no_config {
        write_artifact(&cli.out_dir.join("palette.config.json"), &artifacts.config)?;
    }

    Ok(batch.rejected.is_empty())
}

/// Operator-facing summary: seed, resolved name, variable family.
fn report(palettes: &[Palette]) {
    let name_width = palettes.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for palette in palettes {
        println!(
            "{:<9} → {:<name_width$} → --color-{}",
            palette.seed.to_hex(),
            palette.name,
            palette.slug
        );
    }
}

fn write_artifact(path: &Path, contents: &str) -> Result<(), PaletteError> {
    fs::write(path, contents).map_err(|e| PaletteError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
