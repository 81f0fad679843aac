// Figure display - hands the rendered SVG to the user
use crate::domain::chart::Figure;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

/// Write `figure` to `output`, or to stdout when no path is given.
pub fn show(figure: &Figure, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, &figure.svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} to {}", figure.title, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(figure.svg.as_bytes())
                .context("Failed to write figure to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
