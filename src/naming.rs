//! Derived-name computation and index ordering.
//!
//! Every converted page gets a *derived name*: the source filename with its
//! path and trailing extension stripped. The derived name doubles as the page
//! title and the output base filename (`notes.md` → `notes` → `notes.html`).
//!
//! Only the **last** dot is treated as an extension separator, so dotted
//! version names survive: `v1.2.md` → `v1.2`. A name with no dot at all is
//! kept whole.

use std::cmp::Ordering;
use std::path::Path;

/// Derive the display name for a source file.
///
/// - `docs/notes.md` → `"notes"`
/// - `docs/v1.2.md` → `"v1.2"` (only the final dot is stripped)
/// - `docs/README` → `"README"` (no dot, no-op)
pub fn derived_name(path: &Path) -> String {
    let segment = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    match segment.rfind('.') {
        Some(dot) => segment[..dot].to_string(),
        None => segment.into_owned(),
    }
}

/// Index collation order: case-folded comparison, byte order as tiebreak.
///
/// Approximates locale-aware collation so that `Mu` sorts between `alpha`
/// and `zeta` instead of before both, without pulling in an ICU stack.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_extension_stripped() {
        assert_eq!(derived_name(Path::new("docs/notes.md")), "notes");
    }

    #[test]
    fn only_final_dot_stripped() {
        assert_eq!(derived_name(Path::new("docs/v1.2.md")), "v1.2");
    }

    #[test]
    fn no_dot_is_noop() {
        assert_eq!(derived_name(Path::new("docs/README")), "README");
    }

    #[test]
    fn multi_dot_archive_name() {
        assert_eq!(derived_name(Path::new("archive.tar.gz")), "archive.tar");
    }

    #[test]
    fn nested_path_keeps_only_last_segment() {
        assert_eq!(derived_name(Path::new("a/b/c/setup.md")), "setup");
    }

    #[test]
    fn collation_folds_case() {
        let mut names = vec!["zeta", "alpha", "Mu"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["alpha", "Mu", "zeta"]);
    }

    #[test]
    fn collation_tiebreak_is_stable_for_case_variants() {
        let mut names = vec!["notes", "Notes"];
        names.sort_by(|a, b| collate(a, b));
        assert_eq!(names, vec!["Notes", "notes"]);
    }
}
