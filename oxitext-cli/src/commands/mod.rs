//! Command implementations for OxiText CLI.

pub mod compress;
pub mod expand;

pub use compress::cmd_compress;
pub use expand::cmd_expand;

/// What to do with standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text in, codeword stream out (`-`).
    Compress,
    /// Codeword stream in, text out (`+`).
    Expand,
}

/// Parse the mode argument.
pub fn parse_mode(arg: &str) -> Result<Mode, String> {
    match arg {
        "-" => Ok(Mode::Compress),
        "+" => Ok(Mode::Expand),
        other => Err(format!(
            "unrecognized mode '{other}': use '-' to compress or '+' to expand"
        )),
    }
}
