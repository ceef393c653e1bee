use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "missing-tracks",
    version,
    about = "Report gaps in album track numbering from `Artist - Album - Track - Title` filenames",
    long_about = None,
)]
pub struct Cli {
    /// Directory to scan (overrides `scan.search_path`)
    pub path: Option<PathBuf>,

    /// Separator between artist, album, track number and title
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Only compare files ending in this extension
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Report file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (.toml or .json); must exist when given
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replace the report file instead of appending to it
    #[arg(long)]
    pub overwrite: bool,

    /// Keep raw directory order instead of sorting siblings by name
    #[arg(long)]
    pub unsorted: bool,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_path_and_overrides() {
        let cli = Cli::parse_from([
            "missing-tracks",
            "/srv/music",
            "--delimiter",
            "_",
            "-e",
            "flac",
            "-o",
            "gaps.txt",
            "--overwrite",
        ]);
        assert_eq!(cli.path, Some(PathBuf::from("/srv/music")));
        assert_eq!(cli.delimiter.as_deref(), Some("_"));
        assert_eq!(cli.extension.as_deref(), Some("flac"));
        assert_eq!(cli.output, Some(PathBuf::from("gaps.txt")));
        assert!(cli.overwrite);
        assert!(!cli.unsorted);
        assert!(cli.config.is_none());
    }

    #[test]
    fn path_is_optional() {
        let cli = Cli::parse_from(["missing-tracks", "--print-config"]);
        assert!(cli.path.is_none());
        assert!(cli.print_config);
    }
}
