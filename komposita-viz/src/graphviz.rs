//! Graphviz Integration for the Tree Diagram
//!
//! Renders DOT text to image formats using the Graphviz `dot` command-line
//! tool. A missing Graphviz installation is reported as an error.

use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output format for the tree diagram
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// DOT source, no rendering
    #[default]
    Dot,
    /// Scalable Vector Graphics
    Svg,
    /// Portable Network Graphics
    Png,
    /// Portable Document Format
    Pdf,
}

impl OutputFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &str {
        match self {
            Self::Dot => "dot",
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    /// Whether producing this format needs the Graphviz binary
    pub fn needs_graphviz(&self) -> bool {
        !matches!(self, Self::Dot)
    }

    /// Binary formats cannot be written to a terminal
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Png | Self::Pdf)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            _ => bail!("Unknown output format: {}. Supported: dot, svg, png, pdf", s),
        }
    }
}

const DOT_COMMAND: &str = "dot";

/// Locate Graphviz and report its version string
pub fn check_graphviz_installed() -> Result<String> {
    let binary = which::which(DOT_COMMAND).map_err(|_| {
        anyhow::anyhow!(
            "Graphviz not installed. Install with:\n  \
             Ubuntu/Debian: sudo apt install graphviz\n  \
             macOS: brew install graphviz\n  \
             Windows: choco install graphviz\n  \
             Or download from: https://graphviz.org/download/"
        )
    })?;

    let output = Command::new(&binary)
        .arg("-V")
        .output()
        .with_context(|| format!("Failed to execute {}", binary.display()))?;

    if !output.status.success() {
        bail!("Graphviz 'dot' command failed");
    }

    // `dot -V` prints its version on stderr
    let version = String::from_utf8_lossy(&output.stderr);
    Ok(version.trim().to_string())
}

/// Write DOT content and, unless `format` is DOT, render it next to it
///
/// `output_path`'s extension is replaced by the format's. Returns the path of
/// the final file.
pub fn render_dot_to_file(dot_content: &str, output_path: &Path, format: OutputFormat) -> Result<PathBuf> {
    let dot_file = output_path.with_extension(OutputFormat::Dot.extension());
    std::fs::write(&dot_file, dot_content)
        .with_context(|| format!("Failed to write DOT file: {}", dot_file.display()))?;

    if !format.needs_graphviz() {
        return Ok(dot_file);
    }

    check_graphviz_installed()?;
    let output_file = output_path.with_extension(format.extension());

    let status = Command::new(DOT_COMMAND)
        .arg(format!("-T{}", format.extension()))
        .arg(&dot_file)
        .arg("-o")
        .arg(&output_file)
        .status()
        .with_context(|| format!("Failed to execute Graphviz '{}' command", DOT_COMMAND))?;

    if !status.success() {
        bail!("Graphviz rendering failed with non-zero exit code");
    }

    tracing::debug!(output = %output_file.display(), %format, "tree diagram rendered");
    Ok(output_file)
}

/// Render DOT content directly to an SVG string
pub fn render_dot_to_svg(dot_content: &str) -> Result<String> {
    check_graphviz_installed()?;

    let mut child = Command::new(DOT_COMMAND)
        .arg("-Tsvg")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to spawn Graphviz '{}' process", DOT_COMMAND))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(dot_content.as_bytes())
            .context("Failed to write DOT content to Graphviz stdin")?;
    }

    let result = child
        .wait_with_output()
        .context("Failed to wait for Graphviz process")?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        bail!("Graphviz rendering failed: {}", stderr);
    }

    String::from_utf8(result.stdout).context("Graphviz output is not valid UTF-8")
}
