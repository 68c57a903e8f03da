//! ClassicCipherKit - classical ciphers and textbook RSA
//!
//! Caesar, shift, affine and columnar transposition ciphers with brute-force
//! helpers, plus RSA key generation over small primes.

mod cipher;
mod cli;
mod crypto;
mod error;
mod rsa;
mod types;

#[cfg(feature = "tui")]
mod tui;

use clap::Parser;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(feature = "tui")]
    if cli.tui {
        if let Err(e) = tui::run_tui() {
            eprintln!("TUI Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    #[cfg(not(feature = "tui"))]
    if cli.tui {
        eprintln!("TUI feature not enabled. Rebuild with --features tui");
        std::process::exit(1);
    }

    // Run CLI mode
    if let Err(e) = cli::run_cli(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
