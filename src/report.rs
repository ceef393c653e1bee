//! Console and file output for a finished scan.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::gaps::Diagnostic;

/// Render every diagnostic with the scan's delimiter.
pub fn render(diagnostics: &[Diagnostic], delimiter: &str) -> Vec<String> {
    diagnostics.iter().map(|d| d.render(delimiter)).collect()
}

pub fn print_greeting(root: &Path, out_file: &Path, entries: Option<u64>) {
    println!("Missing track locator.");
    println!("This program will attempt to locate missing files.");
    println!("Files named \"Artist - Album - Track - Title\" are checked for gaps in track numbering.");
    println!("Output will be saved to:\n\t{}\n", out_file.display());
    if let Some(n) = entries {
        println!("{} has {n} files", root.display());
    }
}

pub fn print_lines(lines: &[String]) {
    println!("\nHere are the files that should be investigated:\n");
    for line in lines {
        println!("{line}");
    }
}

/// Write the header and one line per finding to `out`.
pub fn write_to<W: Write>(out: &mut W, root: &Path, lines: &[String]) -> io::Result<()> {
    write!(out, "Files missing from {}...\n\n", root.display())?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write the report to `path`, appending or truncating as configured.
pub fn write_file(path: &Path, root: &Path, lines: &[String], append: bool) -> io::Result<()> {
    debug!(path = %path.display(), append, "writing report");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    write_to(&mut BufWriter::new(file), root, lines)
}
