//! Shared helpers for loading grammar sources.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Load the grammar source from inline text, a file path, or stdin (`-`).
///
/// Returns the source and a display path for diagnostics (inline text has
/// none).
pub fn load_grammar(
    path: Option<&Path>,
    text: Option<&str>,
) -> Result<(String, Option<String>), String> {
    if let Some(text) = text {
        return Ok((text.to_owned(), None));
    }

    let Some(path) = path else {
        return Err("no grammar given: pass a file or use --grammar".to_owned());
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        return Ok((buf, Some("<stdin>".to_owned())));
    }

    let source =
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    Ok((source, Some(path.display().to_string())))
}
