use std::path::PathBuf;

use crate::error::CompileError;
use crate::io::Encoding;

/// Parse the command line, exiting the process on `--help`, `--version` or bad arguments.
pub fn cli<A: CliArg>(
    version: &str,
    usage_args: &str,
    arg_parsers: A,
) -> A::Value {
    let args: Vec<String> = std::env::args().collect();
    let program = args.get(0).cloned().unwrap_or_else(|| "decohack".to_string());
    match parse_args(args.get(1..).unwrap_or(&[]), arg_parsers) {
        Ok(arg_values) => arg_values,
        Err(ParseError::PrintHelp(opts)) => {
            print_help(&program, usage_args, &opts);
            std::process::exit(0);
        },
        Err(ParseError::PrintVersion) => {
            println!("decohack {}", version);
            std::process::exit(0);
        },
        Err(ParseError::Error(e)) => {
            print_usage(&program, usage_args);
            eprintln!();

            e.emit_nospans();
            std::process::exit(1);
        },
    }
}

fn print_usage(program: &str, usage_args: &str) {
    eprintln!("Usage: {} {}", program, usage_args);
}
fn print_help(program: &str, usage_args: &str, opts: &getopts::Options) {
    print!("{}", opts.usage(&format!("Usage: {} {}", program, usage_args)));
}

/// Errors in arguments have no spans.
pub type ArgError = CompileError;

fn arg_error(message: impl std::fmt::Display) -> ArgError {
    error!("{}", message)
}

enum ParseError { Error(ArgError), PrintHelp(getopts::Options), PrintVersion }
// factors out the parts where we want usage with errors
fn parse_args<A: CliArg>(args: &[String], arg_parsers: A) -> Result<A::Value, ParseError> {
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("", "version", "print the version and exit");
    arg_parsers.add_to_options(&mut opts);

    let mut matches = opts.parse(args).map_err(|e| ParseError::Error(arg_error(e)))?;
    if matches.opt_present("h") {
        return Err(ParseError::PrintHelp(opts));
    }
    if matches.opt_present("version") {
        return Err(ParseError::PrintVersion);
    }

    matches.free.reverse();

    let out = arg_parsers.extract_value(&mut matches).map_err(ParseError::Error)?;

    if let Some(unexpected_pos) = matches.free.pop() {
        return Err(ParseError::Error(arg_error(format_args!("unexpected positional: {:?}", unexpected_pos))));
    }

    Ok(out)
}

// ------------------------------------------------

pub trait CliArg {
    type Value;
    fn add_to_options(&self, opts: &mut getopts::Options);
    /// NOTE: `matches.free` is in reverse order, so you can call `Vec::pop` to extract them.
    fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError>;
}

pub fn input() -> impl CliArg<Value=PathBuf> { opts::ReqPathOpt(opts::Positional { metavar: "INPUT" }) }
pub fn output() -> impl CliArg<Value=Option<PathBuf>> { opts::PathOpt(opts::Opt {
    short: "o", long: "output", metavar: "PATH",
    help: "write the patch to PATH instead of the standard output",
})}
pub fn source_output() -> impl CliArg<Value=Option<PathBuf>> { opts::PathOpt(opts::Opt {
    short: "s", long: "source-output", metavar: "PATH",
    help: "write the script with all includes expanded to PATH",
})}
pub fn charset() -> impl CliArg<Value=Encoding> { opts::CharsetOpt }
pub fn budget() -> impl CliArg<Value=bool> { opts::Flag {
    short: "b", long: "budget",
    help: "print the state budget of the compiled patch and exit",
}}


/// A simple HList type for CliArg.
#[doc(hidden)]
pub struct Args<H, T>(pub H, pub T);
#[macro_export]
macro_rules! args {
    () => { () };
    ($a:expr $(, $more:expr)* $(,)?) => { $crate::cli_helper::Args($a, $crate::args!( $($more),* )) }
}
#[macro_export]
macro_rules! args_pat {
    () => { () };
    ($a:pat $(, $more:pat)* $(,)?) => { $crate::cli_helper::Args($a, $crate::args_pat!( $($more),* )) }
}


impl CliArg for () {
    type Value = ();
    fn add_to_options(&self, _: &mut getopts::Options) {}
    fn extract_value(&self, _: &mut getopts::Matches) -> Result<Self::Value, ArgError> { Ok(()) }
}

impl<H: CliArg, T: CliArg> CliArg for Args<H, T> {
    type Value = Args<H::Value, T::Value>;
    fn add_to_options(&self, options: &mut getopts::Options) {
        self.0.add_to_options(options);
        self.1.add_to_options(options);
    }
    fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
        let head = self.0.extract_value(matches)?;
        let tail = self.1.extract_value(matches)?;
        Ok(Args(head, tail))
    }
}


pub mod opts {
    pub use super::*;

    pub struct Opt {
        pub short: &'static str,
        pub long: &'static str,
        pub metavar: &'static str,
        pub help: &'static str
    }
    impl CliArg for Opt {
        type Value = Option<String>;
        fn add_to_options(&self, opts: &mut getopts::Options) {
            opts.optopt(self.short, self.long, self.help, self.metavar);
        }
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            matches.opt_get(self.long).map_err(arg_error)
        }
    }

    pub struct Flag {
        pub short: &'static str,
        pub long: &'static str,
        pub help: &'static str,
    }
    impl CliArg for Flag {
        type Value = bool;
        fn add_to_options(&self, opts: &mut getopts::Options) {
            opts.optflag(self.short, self.long, self.help);
        }
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            Ok(matches.opt_present(self.long))
        }
    }

    pub struct Positional {
        pub metavar: &'static str,
    }
    impl CliArg for Positional {
        type Value = String;
        fn add_to_options(&self, _: &mut getopts::Options) {}
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            matches.free.pop().ok_or_else(|| arg_error(format_args!("missing required positional arg {}", self.metavar)))
        }
    }

    pub struct PathOpt<Inner>(pub Inner);
    impl<Inner: CliArg<Value=Option<String>>> CliArg for PathOpt<Inner> {
        type Value = Option<PathBuf>;
        fn add_to_options(&self, opts: &mut getopts::Options) { self.0.add_to_options(opts) }
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            self.0.extract_value(matches).map(|opt| opt.map(Into::into))
        }
    }

    pub struct ReqPathOpt<Inner>(pub Inner);
    impl<Inner: CliArg<Value=String>> CliArg for ReqPathOpt<Inner> {
        type Value = PathBuf;
        fn add_to_options(&self, opts: &mut getopts::Options) { self.0.add_to_options(opts) }
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            self.0.extract_value(matches).map(Into::into)
        }
    }

    pub struct CharsetOpt;
    impl CliArg for CharsetOpt {
        type Value = Encoding;
        fn add_to_options(&self, opts: &mut getopts::Options) {
            opts.optopt("c", "charset", "character set of the input files, e.g. 'windows-1252' (default: utf-8)", "NAME");
        }
        fn extract_value(&self, matches: &mut getopts::Matches) -> Result<Self::Value, ArgError> {
            match matches.opt_str("charset") {
                Some(label) => crate::io::encoding_from_label(&label),
                None => Ok(crate::io::DEFAULT_ENCODING),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args<PathBuf, Args<Option<PathBuf>, Args<Encoding, Args<bool, ()>>>>, ParseError> {
        let args = args.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        parse_args(&args, crate::args![input(), output(), charset(), budget()])
    }

    #[test]
    fn defaults() {
        let args_pat![input, output, charset, budget] = parse(&["main.dh"]).ok().unwrap();
        assert_eq!(input, PathBuf::from("main.dh"));
        assert_eq!(output, None);
        assert_eq!(charset, encoding_rs::UTF_8);
        assert!(!budget);
    }

    #[test]
    fn options() {
        let args_pat![_, output, charset, budget] = parse(&["-o", "out.deh", "main.dh", "--charset", "latin1", "-b"]).ok().unwrap();
        assert_eq!(output, Some(PathBuf::from("out.deh")));
        assert_eq!(charset, encoding_rs::WINDOWS_1252);
        assert!(budget);
    }

    #[test]
    fn errors() {
        assert!(matches!(parse(&[]), Err(ParseError::Error(_))));
        assert!(matches!(parse(&["a.dh", "b.dh"]), Err(ParseError::Error(_))));
        assert!(matches!(parse(&["a.dh", "-c", "klingon"]), Err(ParseError::Error(_))));
        assert!(matches!(parse(&["--help"]), Err(ParseError::PrintHelp(_))));
        assert!(matches!(parse(&["--version"]), Err(ParseError::PrintVersion)));
    }
}
