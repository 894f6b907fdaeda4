//! Shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Write the completion script for `shell` to `out`.
pub fn write_script<W: Write>(shell: Shell, out: &mut W) {
    let mut command = Cli::command();
    generate(shell, &mut command, crate::APP_NAME, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_mentions_the_binary() {
        let mut buffer = Vec::new();
        write_script(Shell::Bash, &mut buffer);

        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("recap"));
    }
}
