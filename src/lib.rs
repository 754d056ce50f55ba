//! Compiler for DECOHack scripts.
//!
//! A script selects a patch format with a `using` clause and then modifies the thing, state,
//! weapon, ammo, sound, string, par and miscellaneous tables of Doom.  The result is exported as a
//! DeHackEd patch that contains only what differs from the unmodified tables of that format.

#[macro_use]
mod util_macros;

pub use error::{CompileError, ErrorReported};
#[macro_use]
pub mod error;
pub mod diagnostic;

pub use pos::{Files, Span, Sp};
#[macro_use]
pub mod pos;

pub use format::{FeatureLevel, PatchFormat, PointerKind};
pub mod format;

pub mod value;
pub mod flags;
pub mod pointer;

pub use context::PatchContext;
pub mod context;
mod core_tables;

pub mod parse;

pub use export::export;
pub mod export;

pub use api::{Builder, Session, Compiled, StateBudget, compile, compile_file};
pub mod api;

pub mod io;

#[doc(hidden)]
pub mod cli_helper;
#[doc(hidden)]
pub mod cli_def;
