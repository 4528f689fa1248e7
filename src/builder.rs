//! Directory traversal, per-file conversion, and index emission.
//!
//! One [`DocBuilder`] instance owns one build run. It walks the source tree
//! depth-first, converts each `.md` file into a standalone page directly
//! under the output directory, and finally writes an index page linking to
//! everything it converted.
//!
//! ## Output Layout
//!
//! ```text
//! dist/
//! ├── index.html        # "Your docs" — links to every page, sorted by name
//! ├── intro.html        # from docs/intro.md
//! └── setup.html        # from docs/guide/setup.md — output is FLAT
//! ```
//!
//! Flat placement is a policy, not an accident: nested source directories
//! never produce nested output directories, and two sources with the same
//! stem silently overwrite each other (last write wins).
//!
//! ## Error Model
//!
//! Filesystem errors abort the traversal immediately and propagate to the
//! caller; pages already written stay on disk. Non-markdown files are
//! skipped silently. Symlink cycles in the source tree are not detected and
//! recurse unboundedly — an accepted limitation.

use std::fs;
use std::path::{Path, PathBuf};

use maud::{Markup, PreEscaped, html};
use thiserror::Error;

use crate::naming;
use crate::render::Renderer;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One successfully converted page.
#[derive(Debug, Clone)]
pub struct DocEntry {
    /// Derived name: source filename, extension stripped. Doubles as the
    /// page title and the link text in the index.
    pub name: String,
    /// Absolute path of the written HTML file.
    pub path: PathBuf,
}

pub struct DocBuilder {
    output_dir: PathBuf,
    entries: Vec<DocEntry>,
    renderer: Renderer,
}

impl DocBuilder {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            entries: Vec::new(),
            renderer: Renderer::new(),
        }
    }

    /// Pages converted so far, in traversal order until [`build_index`]
    /// sorts them in place.
    ///
    /// [`build_index`]: DocBuilder::build_index
    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    /// Walk `folder` depth-first and convert every `.md` file found.
    ///
    /// May be called more than once (with different roots) before
    /// [`build_index`](DocBuilder::build_index).
    pub fn build_all(&mut self, folder: &Path) -> Result<(), BuildError> {
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if path.is_dir() {
                self.build_all(&path)?;
            } else if is_markdown(&path) {
                self.convert_file(&path)?;
            }
        }
        Ok(())
    }

    /// Write `index.html`: a "Your docs" heading plus one linked bullet per
    /// converted page, sorted by name.
    ///
    /// The sort is in place — after this call [`entries`](DocBuilder::entries)
    /// reflects index order, not traversal order. Caller-driven: run it once
    /// after the last `build_all`.
    pub fn build_index(&mut self) -> Result<(), BuildError> {
        self.entries.sort_by(|a, b| naming::collate(&a.name, &b.name));

        let mut markdown = String::from("# Your docs\n");
        for entry in &self.entries {
            // Raw anchor survives rendering because inline HTML passes through
            markdown.push_str(&format!(
                "## * <a style=\"color: #fff\" href=\"file://{}\">{}</a>\n",
                entry.path.display(),
                entry.name
            ));
        }

        let body = self.renderer.render(&markdown);
        let doc = document_shell("Index", &body);
        fs::write(self.output_dir.join("index.html"), doc.into_string())?;
        Ok(())
    }

    fn convert_file(&mut self, path: &Path) -> Result<(), BuildError> {
        let source = fs::read_to_string(path)?;
        let body = self.renderer.render(&source);
        let name = naming::derived_name(path);
        let doc = document_shell(&name, &body);

        println!("{name}");
        let out_path = std::path::absolute(self.output_dir.join(format!("{name}.html")))?;
        fs::write(&out_path, doc.into_string())?;

        self.entries.push(DocEntry {
            name,
            path: out_path,
        });
        Ok(())
    }
}

/// `.md` exactly, case-sensitive. Everything else is skipped.
fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".md"))
}

/// The fixed shell wrapping every emitted page, index included.
///
/// No doctype, two stylesheet links resolved relative to the output file
/// (`../css/`), Google Fonts preconnect + stylesheet, and a body carrying
/// the full inline style. The font URL is pre-escaped so its `&` separators
/// are emitted verbatim.
fn document_shell(title: &str, content: &str) -> Markup {
    html! {
        html {
            head {
                title { (title) }
                link rel="stylesheet" href="../css/highlight.css";
                link rel="stylesheet" href="../css/main.css";
                link rel="preconnect" href="https://fonts.gstatic.com";
                link href=(PreEscaped("https://fonts.googleapis.com/css2?family=Quicksand&family=Work+Sans:wght@100&display=swap")) rel="stylesheet";
            }
            body style="font-family: 'Quicksand', sans-serif;background-color: #1F2937;color:#E5E7EB; margin-left: 20%;margin-right: 20%;" {
                (PreEscaped(content))
            }
        }
    }
}
