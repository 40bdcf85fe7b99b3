use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use tracing::debug;

use crate::magic::{self, ImageFormat};

pub const DEFAULT_ARRAY_NAME: &str = "image_data";
const BYTES_PER_ROW: usize = 16;

#[derive(Clone, Debug)]
pub struct EmitOptions {
    pub array_name: String,
    pub output_path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub output_path: PathBuf,
    pub size: usize,
    pub format: ImageFormat,
    pub array_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            array_name: DEFAULT_ARRAY_NAME.to_owned(),
            output_path: None,
        }
    }
}

impl EmitOptions {
    pub fn new(array_name: Option<String>, output_path: Option<PathBuf>) -> Self {
        EmitOptions {
            array_name: array_name.unwrap_or_else(|| DEFAULT_ARRAY_NAME.to_owned()),
            output_path,
        }
    }

    /// The explicit output path, or `<array_name>.h`.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.h", self.array_name)))
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "✓ Created: {}", self.output_path.display())?;
        writeln!(f, "  Size: {} bytes", self.size)?;
        writeln!(f, "  MIME: {}", self.format)?;
        write!(f, "  Array: {}", self.array_name)
    }
}

/// Read `input`, sniff its format and write it out as a `PROGMEM` array.
///
/// The output file is created or truncated; nothing is cleaned up if the
/// write fails halfway.
pub fn emit(input: &Path, options: &EmitOptions) -> anyhow::Result<Summary> {
    if !input.exists() {
        anyhow::bail!("File '{}' not found", input.display());
    }

    let data = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let format = magic::detect(&data);
    debug!(path = %input.display(), size = data.len(), %format, "read input");

    let output_path = options.output_path();
    let header = render(input, &data, &options.array_name, format);
    fs::write(&output_path, header)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    debug!(path = %output_path.display(), "wrote header");

    Ok(Summary {
        output_path,
        size: data.len(),
        format,
        array_name: options.array_name.clone(),
    })
}

pub fn render(source: &Path, data: &[u8], array_name: &str, format: ImageFormat) -> String {
    let size = data.len();
    let rows = render_rows(data);
    format!(
        "// Generated from: {source}\n\
         // Size: {size} bytes\n\
         // MIME type: {format}\n\
         const uint8_t {array_name}[] PROGMEM = {{\n\
         {rows}\
         }};\n\
         \n\
         // Usage example:\n\
         // server.setLogoFromImage({array_name}, sizeof({array_name}), \"{format}\");\n",
        source = source.display(),
    )
}

/// Hex literals, 16 per row. Every row but the last ends in a comma.
pub fn render_rows(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let rows = data
        .chunks(BYTES_PER_ROW)
        .map(|row| {
            let values = row
                .iter()
                .map(|byte| format!("0x{byte:02X}"))
                .collect::<Vec<_>>();
            format!("  {}", values.join(", "))
        })
        .collect::<Vec<_>>();

    let mut out = rows.join(",\n");
    out.push('\n');
    out
}
