use clap::Parser;
use std::path::PathBuf;

/// A tiny ed-style line editor.
///
/// Commands are read from standard input one line at a time: `[s[,e]]p`, `[s[,e]]d`,
/// `[n]a`, `[n]i`, `[s[,e]]c`, `[s[,e]]n`, `[n]=`, `r <file>`, `w <file>` and `q`.
#[derive(Debug, Parser)]
#[command(name = "tined", version)]
pub struct Cli {
    /// File to read into the buffer before the first command, as if by `r FILE`.
    pub file: Option<PathBuf>,

    /// Configuration file (overrides `<config_dir>/tined/config.toml`).
    #[arg(long, env = "TINED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path, or a directory to hold `tined-<pid>.log`.
    #[arg(long, env = "TINED_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_plain_interactive_mode() {
        let cli = Cli::try_parse_from(["tined"]).unwrap();
        assert!(cli.file.is_none());
    }

    #[test]
    fn parses_file_and_flags() {
        let cli = Cli::try_parse_from([
            "tined",
            "notes.txt",
            "--config",
            "ed.toml",
            "--log-file",
            "/tmp/tined.log",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.config, Some(PathBuf::from("ed.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tined.log")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["tined", "--prompt", "*"]).is_err());
    }
}
