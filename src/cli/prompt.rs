//! Line-oriented command prompt
//!
//! Reads commands from any `BufRead` and writes responses to any `Write`, so
//! the same loop drives stdin/stdout in the binary and in-memory buffers in
//! tests.

use crate::core::BankClient;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const SUPPORTED: &str = "balance, deposit, withdrawal, exit";

/// A parsed prompt command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Balance,
    Deposit,
    Withdrawal,
    Exit,
}

impl Command {
    /// Parse a raw input line, ignoring case and surrounding whitespace
    ///
    /// Returns `None` for anything that is not a known command.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "balance" => Some(Command::Balance),
            "deposit" => Some(Command::Deposit),
            "withdrawal" | "withdraw" => Some(Command::Withdrawal),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Run the command loop until `exit` or end of input
///
/// Operation errors are reported to `output` and logged; the loop keeps
/// going. Only I/O failures on `input` or `output` end it with an error.
pub fn run_prompt<C, R, W>(client: &C, mut input: R, output: &mut W) -> io::Result<()>
where
    C: BankClient + Display + ?Sized,
    R: BufRead,
    W: Write + ?Sized,
{
    writeln!(output, "Account: {}", client)?;
    writeln!(output, "Supported commands: {}", SUPPORTED)?;
    output.flush()?;

    while let Some(line) = read_line(&mut input)? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Some(command) => command,
            None => {
                writeln!(
                    output,
                    "Unsupported command. You can use commands: {}",
                    SUPPORTED
                )?;
                continue;
            }
        };

        match command {
            Command::Balance => writeln!(output, "{}", client.balance())?,
            Command::Deposit | Command::Withdrawal => {
                let verb = if command == Command::Deposit {
                    "deposit"
                } else {
                    "withdraw"
                };
                write!(output, "Enter a value to {}: ", verb)?;
                output.flush()?;

                let Some(raw) = read_line(&mut input)? else {
                    break;
                };
                let amount = match raw.trim().parse::<i64>() {
                    Ok(amount) => amount,
                    Err(e) => {
                        tracing::warn!(error = %e, "amount is not a number");
                        writeln!(output, "amount must be a number")?;
                        continue;
                    }
                };

                let result = if command == Command::Deposit {
                    client.deposit(amount)
                } else {
                    client.withdraw(amount)
                };
                match result {
                    Ok(()) => writeln!(
                        output,
                        "Successful operation. Balance: {}",
                        client.balance()
                    )?,
                    Err(e) => {
                        tracing::warn!(error = %e, amount, "{} rejected", verb);
                        writeln!(output, "{}", e)?;
                    }
                }
            }
            Command::Exit => break,
        }
        output.flush()?;
    }

    Ok(())
}

/// Read one line, replacing invalid UTF-8 instead of failing
///
/// Returns `None` at end of input.
fn read_line<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
