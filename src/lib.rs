//! # Simple Docs
//!
//! A minimal markdown-to-HTML docs generator. Your filesystem is the data
//! source: point it at a directory tree of `.md` files and it produces one
//! styled, standalone HTML page per file plus an `index.html` linking to all
//! of them, sorted by name.
//!
//! # How a Build Works
//!
//! One [`builder::DocBuilder`] instance owns one build:
//!
//! ```text
//! construct(output_dir)  →  build_all(source)*  →  build_index()  →  drop
//! ```
//!
//! `build_all` recurses depth-first over the source tree, converting every
//! `.md` file it finds and recording `{name, output path}` for each. The
//! output is deliberately **flat**: `docs/guide/setup.md` lands at
//! `dist/setup.html`, not `dist/guide/setup.html`. Two sources with the same
//! stem therefore overwrite each other — that is the documented policy, not a
//! bug. `build_index` then sorts the recorded pages by name and writes the
//! index page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`builder`] | Traversal, per-file conversion, document shell, index emission |
//! | [`render`] | Markdown → HTML via pulldown-cmark, with code-block interception |
//! | [`highlight`] | Best-effort syntax highlighting via syntect |
//! | [`naming`] | Derived-name computation and index collation order |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! The fixed document shell is generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro system: malformed HTML is a build error, page
//! titles are auto-escaped, and there is no template directory to ship.
//!
//! ## Best-Effort Highlighting
//!
//! Fenced code blocks with a recognized language tag are highlighted with
//! syntect; everything else — unknown tags, missing tags, highlighter errors —
//! falls back to the markdown renderer's own escaped `<pre><code>` output.
//! The fallback is an explicit `Option` branch in [`render`], so a broken
//! code block can never abort a build.
//!
//! ## Errors Propagate, Nothing Retries
//!
//! Filesystem errors are not caught anywhere in the library; one unreadable
//! file aborts the remaining traversal and surfaces from `main`. Pages
//! already written stay on disk. This is a deliberate simplicity tradeoff:
//! the tool is rerun, not resumed.

pub mod builder;
pub mod highlight;
pub mod naming;
pub mod render;
