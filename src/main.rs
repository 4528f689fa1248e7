use clap::Parser;
use simple_docs::builder::DocBuilder;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-docs")]
#[command(about = "Turn a markdown directory tree into styled HTML docs with an index")]
#[command(long_about = "\
Turn a markdown directory tree into styled HTML docs with an index

Walks --source recursively, converts every .md file into a standalone
styled page directly under --output (flat — input nesting is not
mirrored), then writes an index.html linking to all pages sorted by name.

  docs/
  ├── intro.md          → dist/intro.html
  ├── guide/
  │   └── setup.md      → dist/setup.html
  └── logo.png          → skipped (not markdown)

Generated pages link ../css/highlight.css and ../css/main.css relative
to the output directory; keep a css/ directory next to it for styling.")]
#[command(version)]
struct Cli {
    /// Directory tree of markdown sources
    #[arg(long, default_value = "docs")]
    source: PathBuf,

    /// Directory where generated pages are written
    #[arg(long, default_value = "dist")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.output)?;

    let mut builder = DocBuilder::new(&cli.output);
    builder.build_all(&cli.source)?;
    builder.build_index()?;

    println!(
        "Generated {} pages + index at {}",
        builder.entries().len(),
        cli.output.display()
    );
    Ok(())
}
