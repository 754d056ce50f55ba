use std::io::Write;
use std::path::PathBuf;

use crate::api::{Builder, Session, StateBudget};
use crate::error::ErrorReported;
use crate::io::Encoding;

/// Entry point of the `decohack` binary.
pub fn main(version: &str) -> ! {
    use crate::{cli_helper as cli, args, args_pat};

    let args_pat![input, output, source_output, charset, budget] = cli::cli(
        version,
        "INPUT [OPTIONS...]",
        args![cli::input(), cli::output(), cli::source_output(), cli::charset(), cli::budget()],
    );

    let options = Options { input, output, source_output, charset, budget };
    let mut session = Builder::new().encoding(options.charset).build();
    match run(&mut session, &options, version) {
        Ok(()) => std::process::exit(0),
        Err(ErrorReported) => std::process::exit(1),
    }
}

pub struct Options {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub source_output: Option<PathBuf>,
    pub charset: Encoding,
    pub budget: bool,
}

/// Compile the input and write everything that was asked for.
///
/// Nothing is written when compilation fails.
pub fn run(session: &mut Session, options: &Options, version: &str) -> Result<(), ErrorReported> {
    let compiled = session.compile_file(&options.input)?;

    if options.budget {
        for line in StateBudget::of(&compiled.context).lines() {
            session.write_note(&line);
        }
        return Ok(());
    }

    if let Some(path) = &options.source_output {
        session.write_expanded_source(path, &compiled)?;
    }

    let comment = format!("Created with decohack {}", version);
    match &options.output {
        Some(path) => session.write_patch(path, &compiled.context, &comment),
        None => write_stdout(session, &crate::export::export(&compiled.context, &comment)),
    }
}

fn write_stdout(session: &mut Session, patch: &str) -> Result<(), ErrorReported> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(patch.as_bytes())
        .and_then(|()| lock.flush())
        .map_err(|e| session.emit(error!("while writing to standard output: {}", e)))
}
