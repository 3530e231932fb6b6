//! Filename to (name, extension) classification

use crate::constants::SUPPORTED_EXTENSIONS;

/// Split `entry_name` into a font name and a supported extension.
///
/// The split happens on the last `.`, so `My.Font.ttf` yields `("My.Font", "ttf")`.
/// Names without a dot, with an empty base name (`.ttf`), or with an extension
/// outside `ttf`/`otf` are not fonts. Matching is case-sensitive.
pub fn classify(entry_name: &str) -> Option<(String, String)> {
    classify_with(entry_name, &SUPPORTED_EXTENSIONS)
}

/// [`classify`] against a caller-supplied extension list.
pub fn classify_with<S: AsRef<str>>(entry_name: &str, extensions: &[S]) -> Option<(String, String)> {
    let (name, extension) = entry_name.rsplit_once('.')?;
    if name.is_empty() {
        return None;
    }
    if !extensions.iter().any(|ext| ext.as_ref() == extension) {
        return None;
    }
    Some((name.to_string(), extension.to_string()))
}
