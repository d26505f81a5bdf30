extern crate miette;
extern crate thiserror;

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConverterError {
    #[error("error converting an value")]
    #[diagnostic(code(libonsdec::try_from_int_error))]
    TryFromIntError(#[from] std::num::TryFromIntError),
}

#[derive(Error, Diagnostic, Debug)]
pub enum DecoderError {
    #[error(transparent)]
    #[diagnostic(code(libonsdec::convert_error))]
    ConvertValue(#[from] ConverterError),

    #[error("unrecognized script file name '{name}'")]
    #[diagnostic(
        code(libonsdec::unknown_format),
        help("supported names: 0.txt, 00.txt, nscript.dat, nscr_sec.dat, nscript.___, onscript.nt2, onscript.nt3")
    )]
    UnknownFormat { name: String },

    #[error("the 'nscript.___' format requires an external key table")]
    #[diagnostic(
        code(libonsdec::missing_key_table),
        help("pass the 256-byte table with '--key-file <PATH>'")
    )]
    MissingKeyTable,

    #[error("incorrect key table size (expected {expected:?} bytes, received {received:?} bytes)")]
    #[diagnostic(code(libonsdec::key_table_size_error))]
    IncorrectSizeTable { expected: usize, received: usize },

    #[error("key table file '{path}' not found")]
    #[diagnostic(code(libonsdec::key_table_not_found))]
    KeyTableNotFound { path: PathBuf },

    #[error("input file '{path}' not found")]
    #[diagnostic(code(libonsdec::input_not_found))]
    InputNotFound { path: PathBuf },

    #[error("file is too small (must be larger than {expected:?} bytes, received {received:?} bytes)")]
    #[diagnostic(code(libonsdec::file_size_error))]
    SmallFile { expected: u64, received: u64 },

    #[error("script file reading error")]
    #[diagnostic(code(libonsdec::io_error))]
    ReadFile(#[from] std::io::Error),
}
