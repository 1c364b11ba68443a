use log::debug;
use std::path::Path;

/// Replace the first occurrence of `old_literal` in the file at `path` with
/// `new_literal`, leaving every other byte unchanged.
///
/// The whole file is read, transformed in memory, and written back in a
/// single call, so a failure leaves the file either fully rewritten or
/// untouched rather than half-old/half-new.
pub fn rewrite(path: &Path, old_literal: &str, new_literal: &str) -> std::io::Result<()> {
    debug!(
        "Rewriting '{}': {} -> {}",
        path.display(),
        old_literal,
        new_literal
    );
    let contents = std::fs::read_to_string(path)?;
    let new_contents = contents.replacen(old_literal, new_literal, 1);
    std::fs::write(path, new_contents)
}
