use crate::error::{Error, Result};

use std::path::Path;

/// Check if the specified path is valid and exists.
///
/// # Arguments
///
/// * `path` - The path to be checked.
///
#[inline]
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// Build the output path for a derived image: the source's filename with a
/// prefix attached, placed in the source's own directory.
///
/// # Arguments
///
/// * `source` - The path of the image the output is derived from.
/// * `prefix` - The prefix for the output filename, without the separator.
///
/// `Note:` `prefixed_output_path("imgs/cat.png", "encoded")` yields
/// `imgs/encoded_cat.png`.
///
pub fn prefixed_output_path(source: &str, prefix: &str) -> Result<String> {
    let path = Path::new(source);

    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return Err(Error::PathInvalid);
    };

    let out = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(format!("{prefix}_{name}")),
        _ => format!("{prefix}_{name}").into(),
    };

    out.to_str()
        .map(|s| s.to_string())
        .ok_or(Error::PathInvalid)
}
