//! The `tined` binary: command-line parsing, configuration and wiring the editing
//! session to standard input and output.

pub mod cli;
pub mod config;

use anyhow::Result;
use cli::Cli;
use config::Config;
use std::{io, path::PathBuf};
use tined_core::{
    Command, Exit, InputSource, LocalFs, OutputSink, ReaderSource, Session, WriterSink,
};

/// Build a session over the given streams using the configured capacity.
pub fn session<I, O>(config: &Config, input: I, output: O) -> Session<I, O, LocalFs>
where
    I: InputSource,
    O: OutputSink,
{
    Session::new(config.session(), input, output, LocalFs)
}

/// Read the optional startup file, then run the command loop to completion.
pub fn edit<I, O>(
    session: &mut Session<I, O, LocalFs>,
    file: Option<PathBuf>,
) -> tined_core::Result<Exit>
where
    I: InputSource,
    O: OutputSink,
{
    if let Some(path) = file {
        session.run_command(Command::Read { path })?;
    }
    session.run()
}

/// Run the editor on stdin/stdout.
pub fn run(cli: Cli) -> Result<Exit> {
    let discovered = config::discover();
    let config = Config::load_with_overrides(cli.config.as_deref(), discovered.as_deref())?;
    tracing::debug!(?config, "loaded configuration");

    let input = ReaderSource::new(io::stdin().lock());
    let output = WriterSink::new(io::stdout().lock());
    let mut session = session(&config, input, output);
    Ok(edit(&mut session, cli.file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn startup_file_is_read_before_commands() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let mut session = session(
            &Config::default(),
            ReaderSource::new("1p\nq\n".as_bytes()),
            WriterSink::new(Vec::new()),
        );
        let exit = edit(&mut session, Some(path)).unwrap();

        assert_eq!(exit, Exit::Quit);
        assert_eq!(session.into_output().into_inner(), b"2\nfirst\n");
    }

    #[test]
    fn missing_startup_file_reports_and_continues() {
        let dir = tempdir().unwrap();
        let mut session = session(
            &Config::default(),
            ReaderSource::new("a\nhello\n.\np\n".as_bytes()),
            WriterSink::new(Vec::new()),
        );
        let exit = edit(&mut session, Some(dir.path().join("missing.txt"))).unwrap();

        assert_eq!(exit, Exit::EndOfInput);
        assert_eq!(session.into_output().into_inner(), b"?\nhello\n");
    }

    #[test]
    fn configured_capacity_limits_buffer() {
        let config = Config { max_lines: 1 };
        let mut session = session(
            &config,
            ReaderSource::new("a\none\ntwo\n".as_bytes()),
            WriterSink::new(Vec::new()),
        );
        edit(&mut session, None).unwrap();

        assert_eq!(session.store().len(), 1);
        assert_eq!(session.into_output().into_inner(), b"?\n");
    }
}
