//! Line diffs for dry runs

use similar::TextDiff;
use std::path::Path;

/// Unified diff of `old` against `new` with three lines of context. Empty when the
/// texts are equal.
pub fn unified(path: &Path, old: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let name = path.display().to_string();
    diff.unified_diff()
        .context_radius(3)
        .header(&format!("{name} (current)"), &format!("{name} (new)"))
        .to_string()
}
