//! Writing command results to the user.

use crate::constants::{DEFAULT_JSON_INDENT, OUTPUT_FILE_MODE};
use crate::error::CliError;
use crate::resolve::OutputFormat;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Serialize `value` as JSON or YAML and write it to `out`
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let data = match format {
        OutputFormat::Json => to_json(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.into_bytes(),
    };
    out.write_all(&data).map_err(CliError::Output)?;
    if !data.ends_with(b"\n") {
        out.write_all(b"\n").map_err(CliError::Output)?;
    }
    out.flush().map_err(CliError::Output)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, CliError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(DEFAULT_JSON_INDENT.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write raw artifact content verbatim to `output_file`, or to `out` when no
/// file is given
pub fn write_content(
    content: &[u8],
    output_file: Option<&Path>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match output_file.filter(|p| !p.as_os_str().is_empty()) {
        Some(path) => {
            let file_err = |source| CliError::FileAccess {
                path: path.to_path_buf(),
                source,
            };
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(OUTPUT_FILE_MODE);
            }
            let mut file = options.open(path).map_err(file_err)?;
            file.write_all(content).map_err(file_err)?;
            tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
            Ok(())
        }
        None => {
            out.write_all(content).map_err(CliError::Output)?;
            out.flush().map_err(CliError::Output)
        }
    }
}
