//! PNG output and file name generation

use image::RgbaImage;
use std::io;
use std::path::Path;

/// File name stem used when nothing better can be derived.
pub const DEFAULT_STEM: &str = "prompt";

/// Configuration file extensions that yield a derived output name.
const CONFIG_EXTENSIONS: &[&str] = &["json", "toml", "yaml", "yml"];

/// Marker preceding the extension in `<name>.omp.<ext>` theme files.
const THEME_MARKER: &str = ".omp";

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

/// Save an RGBA image to a PNG file.
///
/// Parent directories are created as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Resolve the output file name for a rendered prompt.
///
/// # Output Naming Rules
///
/// | Explicit path | Config path | Output |
/// |---------------|-------------|--------|
/// | `mytheme.png` | anything | `mytheme.png` |
/// | empty | empty | `prompt.png` |
/// | empty | `.posh.omp.json` | `posh.png` |
/// | empty | `~/jandedobbeleer.omp.json` | `jandedobbeleer.png` |
/// | empty | `~/jandedobbeleer.json` | `jandedobbeleer.png` |
/// | empty | `~/jandedobbeleer.omp.foo` | `prompt.png` |
///
/// Recognized extensions are `json`, `toml`, `yaml` and `yml`. The config
/// path is treated as a plain string and never touched on disk.
pub fn resolve_output_path(explicit: &str, config: &str) -> String {
    if !explicit.is_empty() {
        return explicit.to_string();
    }
    format!("{}.png", derive_stem(config).unwrap_or(DEFAULT_STEM))
}

/// Derive the output stem from a config path, if it follows a known convention.
fn derive_stem(config: &str) -> Option<&str> {
    // Both separators count so Windows-style paths work on any platform
    let file_name = config.rsplit(&['/', '\\'][..]).next().unwrap_or(config);
    let file_name = file_name.strip_prefix('.').unwrap_or(file_name);

    let (rest, ext) = file_name.rsplit_once('.')?;
    if !CONFIG_EXTENSIONS.contains(&ext) {
        return None;
    }

    let stem = rest.strip_suffix(THEME_MARKER).unwrap_or(rest);
    if stem.is_empty() {
        None
    } else {
        Some(stem)
    }
}
