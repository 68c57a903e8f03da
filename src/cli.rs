//! Command-line interface

use crate::cipher::{affine, caesar, shift, transposition, AffineKey, Candidate, TranspositionKey};
use crate::crypto::{letter_to_char, ALPHABET_LEN};
use crate::rsa::{self, generate_keypair, RsaPrivateKey, RsaPublicKey};
use crate::types::{parse_integer, parse_natural, Mode, CIPHERS};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "classic_cipher_kit")]
#[command(author = "ClassicCipherKit Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Classical ciphers and textbook RSA")]
#[command(long_about = "Classical ciphers and textbook RSA\n\n\
    Run with --tui to launch the terminal interface.\n\
    Provide a subcommand to use CLI mode.")]
pub struct Cli {
    /// Launch TUI mode (terminal interface)
    #[arg(long)]
    pub tui: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Caesar cipher with the fixed shift of 3
    Caesar {
        /// Decode instead of encode
        #[arg(long, conflicts_with = "brute")]
        decode: bool,
        /// List the decryption under every key 0-25
        #[arg(long)]
        brute: bool,
        /// Text to transform (non-letters are dropped)
        text: String,
    },

    /// Shift cipher with an arbitrary integer key
    Shift {
        /// Shift key k (any integer, taken mod 26)
        #[arg(long, allow_hyphen_values = true, required_unless_present = "brute")]
        key: Option<String>,
        #[arg(long, conflicts_with = "brute")]
        decode: bool,
        /// List the decryption under every key 0-25
        #[arg(long)]
        brute: bool,
        text: String,
    },

    /// Affine cipher E(x) = a*x + b mod 26
    Affine {
        /// Multiplier a, coprime with 26
        #[arg(short, allow_hyphen_values = true, required_unless_present = "brute")]
        a: Option<String>,
        /// Offset b (any integer, taken mod 26)
        #[arg(short, allow_hyphen_values = true, required_unless_present = "brute")]
        b: Option<String>,
        #[arg(long, conflicts_with = "brute")]
        decode: bool,
        /// List the decryption under all 312 keys
        #[arg(long)]
        brute: bool,
        text: String,
    },

    /// Keyed columnar transposition
    Transposition {
        /// Keyword of at least two letters
        #[arg(long)]
        key: String,
        #[arg(long)]
        decode: bool,
        /// Print the row/column grid
        #[arg(long)]
        grid: bool,
        text: String,
    },

    /// Textbook RSA over small primes
    #[command(subcommand)]
    Rsa(RsaCommand),

    /// Print the letter/number table
    Alphabet,

    /// List all supported ciphers
    List,
}

#[derive(Subcommand, Debug)]
pub enum RsaCommand {
    /// Derive n, φ(n), e and d from two distinct primes
    Keygen {
        #[arg(short)]
        p: String,
        #[arg(short)]
        q: String,
    },
    /// Compute c = m^e mod n
    Encrypt {
        #[arg(short)]
        m: String,
        #[arg(short)]
        e: String,
        #[arg(short)]
        n: String,
    },
    /// Compute m = c^d mod n
    Decrypt {
        #[arg(short)]
        c: String,
        #[arg(short)]
        d: String,
        #[arg(short)]
        n: String,
    },
}

pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.ok_or_else(|| {
        anyhow::anyhow!("a subcommand is required. Use --help for more information.")
    })?;

    execute(command)?.iter().for_each(|line| println!("{}", line));
    Ok(())
}

fn rule() -> String {
    "=".repeat(60)
}

/// Run one command and return the lines to print
pub fn execute(command: Command) -> anyhow::Result<Vec<String>> {
    let mut out = Vec::new();

    match command {
        Command::Caesar { decode, brute, text } => {
            if brute {
                let candidates = caesar::brute_force(&text)?;
                framed(&mut out, "Caesar brute force (26 keys):", &candidate_lines(&candidates));
            } else {
                let mode = Mode::from_decode_flag(decode);
                let result = caesar::apply(&text, mode)?;
                framed(&mut out, &format!("Caesar (k = 3) {}:", mode.label()), &[result]);
            }
        }

        Command::Shift { key, decode, brute, text } => {
            if brute {
                let candidates = shift::brute_force(&text)?;
                framed(&mut out, "Shift brute force (26 keys):", &candidate_lines(&candidates));
            } else {
                let key = key
                    .ok_or_else(|| anyhow::anyhow!("--key is required unless --brute is given"))?;
                let k = parse_integer("k", &key)?;
                let mode = Mode::from_decode_flag(decode);
                let result = shift::apply(&text, k, mode)?;
                framed(&mut out, &format!("Shift (k = {}) {}:", k, mode.label()), &[result]);
            }
        }

        Command::Affine { a, b, decode, brute, text } => {
            if brute {
                let candidates = affine::brute_force(&text)?;
                framed(&mut out, "Affine brute force (312 keys):", &candidate_lines(&candidates));
            } else {
                let (a, b) = match (a, b) {
                    (Some(a), Some(b)) => (a, b),
                    _ => anyhow::bail!("Both -a and -b must be provided unless --brute is given"),
                };
                let key = AffineKey::new(parse_integer("a", &a)?, parse_integer("b", &b)?)?;
                let mode = Mode::from_decode_flag(decode);
                let result = affine::apply(&text, &key, mode)?;
                framed(
                    &mut out,
                    &format!("Affine (a = {}, b = {}) {}:", key.a(), key.b(), mode.label()),
                    &[result],
                );
            }
        }

        Command::Transposition { key, decode, grid, text } => {
            let key = TranspositionKey::new(&key)?;
            let mode = Mode::from_decode_flag(decode);
            let result = transposition::apply(&text, &key, mode)?;
            let keyword: String = key.letters().iter().collect();
            framed(
                &mut out,
                &format!("Transposition (key = {}) {}:", keyword, mode.label()),
                &[result.text],
            );
            if grid {
                out.push(String::new());
                out.extend(result.grid.to_string().lines().map(str::to_string));
            }
        }

        Command::Rsa(RsaCommand::Keygen { p, q }) => {
            let keypair = generate_keypair(&parse_natural("p", &p)?, &parse_natural("q", &q)?)?;
            let (public, private) = (keypair.public_key(), keypair.private_key());
            framed(
                &mut out,
                &format!("RSA key pair for p = {}, q = {}:", keypair.p, keypair.q),
                &[
                    format!("n = {}", keypair.n),
                    format!("φ(n) = {}", keypair.phi),
                    format!("e (public) = {}", keypair.e),
                    format!("d (private) = {}", keypair.d),
                    format!("public key (e, n) = ({}, {})", public.e, public.n),
                    format!("private key (d, n) = ({}, {})", private.d, private.n),
                ],
            );
        }

        Command::Rsa(RsaCommand::Encrypt { m, e, n }) => {
            let key = RsaPublicKey {
                e: parse_natural("e", &e)?,
                n: parse_natural("n", &n)?,
            };
            let c = rsa::encrypt(&parse_natural("m", &m)?, &key)?;
            framed(&mut out, "RSA ciphertext C = M^e mod n:", &[c.to_string()]);
        }

        Command::Rsa(RsaCommand::Decrypt { c, d, n }) => {
            let key = RsaPrivateKey {
                d: parse_natural("d", &d)?,
                n: parse_natural("n", &n)?,
            };
            let m = rsa::decrypt(&parse_natural("c", &c)?, &key)?;
            framed(&mut out, "RSA plaintext M = C^d mod n:", &[m.to_string()]);
        }

        Command::Alphabet => {
            out.push(String::new());
            out.extend(alphabet_table());
            out.push(String::new());
        }

        Command::List => {
            out.push(String::new());
            out.push("Supported ciphers:".to_string());
            out.push(String::new());
            for (name, description) in CIPHERS {
                out.push(format!("  {:14} - {}", name, description));
            }
            out.push(String::new());
        }
    }

    Ok(out)
}

fn framed(out: &mut Vec<String>, title: &str, body: &[String]) {
    out.push(rule());
    out.push(title.to_string());
    out.extend(body.iter().cloned());
    out.push(rule());
}

/// One line per candidate, e.g. `k = 03  EBIIL`
pub fn candidate_lines(candidates: &[Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|c| format!("{:12} {}", c.key.to_string(), c.text))
        .collect()
}

/// `A 00` .. `Z 25`, one letter per line
pub fn alphabet_table() -> Vec<String> {
    (0..ALPHABET_LEN)
        .map(|n| format!("  {} {:02}", letter_to_char(n), n))
        .collect()
}
