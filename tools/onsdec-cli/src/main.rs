extern crate libonsdec;

use std::path::PathBuf;

use clap::Parser;
use libonsdec::keytable::KeyTable;
use libonsdec::Format;
use miette::{IntoDiagnostic, Result};

#[derive(Parser, Debug)]
#[command(name = "ONScripter script decryptor")]
#[command(about, author, version, long_about = None)]
struct Cli {
    /// Encrypted script file (nscript.dat, nscr_sec.dat, nscript.___, onscript.nt2, onscript.nt3, 0.txt, 00.txt)
    input: PathBuf,
    /// Destination for the decoded script
    output: PathBuf,
    /// External 256-byte key table, required for "nscript.___"
    #[arg(long, value_name = "PATH")]
    key_file: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    let stdout = console::Term::stdout();

    // The original tool exits with status 1 on a malformed invocation,
    // so clap's usage status of 2 must not leak through.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            std::process::exit(1);
        }
    };

    stdout
        .write_line(&format!("Processing file: {}", cli.input.display()))
        .into_diagnostic()?;

    let name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(format) = Format::detect(&name) {
        stdout
            .write_line(&format!("Detected format: {:?}", format))
            .into_diagnostic()?;
    }

    let key_table = match &cli.key_file {
        Some(path) => Some(KeyTable::from_file(path)?),
        None => None,
    };

    libonsdec::decoder::decode_file(&cli.input, &cli.output, key_table.as_ref())?;

    stdout
        .write_line(&format!(
            "Decoded script saved as '{}'",
            cli.output.display()
        ))
        .into_diagnostic()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_arguments_fail_to_parse() {
        assert!(Cli::try_parse_from(["onsdec-cli"]).is_err());
        assert!(Cli::try_parse_from(["onsdec-cli", "nscript.dat"]).is_err());
    }

    #[test]
    fn dangling_key_file_fails_to_parse() {
        assert!(Cli::try_parse_from(["onsdec-cli", "nscript.___", "out.txt", "--key-file"]).is_err());
    }

    #[test]
    fn key_file_value_is_accepted() {
        let cli = Cli::try_parse_from([
            "onsdec-cli",
            "nscript.___",
            "out.txt",
            "--key-file",
            "table.bin",
        ])
        .expect("valid invocation rejected");
        assert_eq!(cli.key_file.as_deref(), Some(std::path::Path::new("table.bin")));
    }
}
