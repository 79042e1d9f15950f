//! Console input: passphrases, text lines, and yes/no questions.
//!
//! When stdin is a terminal, input goes through `dialoguer` so secrets are
//! read without echo.  Otherwise (piped input, scripts, tests) each answer
//! is one plain line read from the underlying reader.

use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use dialoguer::{Confirm, Input, Password};
use zeroize::Zeroizing;

use crate::errors::{PwVaultError, Result};

/// Everything the menu loop and the unlock flow ask the user for.
pub trait Prompt {
    /// Read a secret.  Returned as raw bytes, wiped on drop.
    fn prompt_passphrase(&mut self, label: &str) -> Result<Zeroizing<Vec<u8>>>;

    /// Read a secret a second time, for confirmation.
    fn confirm_passphrase(&mut self, label: &str) -> Result<Zeroizing<Vec<u8>>> {
        self.prompt_passphrase(label)
    }

    /// Read one line of text.  `None` means input is exhausted.
    fn read_line(&mut self, label: &str) -> Result<Option<String>>;

    /// Ask a yes/no question.  Defaults to "no".
    fn confirm(&mut self, label: &str) -> Result<bool>;
}

/// `Prompt` over the process's terminal, or any line reader.
pub struct TerminalPrompt {
    input: Box<dyn BufRead>,
    interactive: bool,
}

impl TerminalPrompt {
    /// Prompt on stdin, hiding secrets when stdin is a terminal.
    pub fn stdin() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            input: Box::new(BufReader::new(io::stdin())),
        }
    }

    /// Prompt from an arbitrary reader, one line per answer.
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            input: Box::new(reader),
            interactive: false,
        }
    }

    /// Print `label` and read one line with its line ending removed.
    fn next_line(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

impl Prompt for TerminalPrompt {
    fn prompt_passphrase(&mut self, label: &str) -> Result<Zeroizing<Vec<u8>>> {
        if self.interactive {
            let secret = Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()
                .map_err(|e| PwVaultError::CommandFailed(format!("password prompt: {e}")))?;
            return Ok(Zeroizing::new(secret.into_bytes()));
        }

        match self.next_line(label)? {
            Some(line) => Ok(Zeroizing::new(line.into_bytes())),
            None => Err(PwVaultError::UserCancelled),
        }
    }

    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        if self.interactive {
            let text = Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| PwVaultError::CommandFailed(format!("input prompt: {e}")))?;
            return Ok(Some(text));
        }

        self.next_line(label)
    }

    fn confirm(&mut self, label: &str) -> Result<bool> {
        if self.interactive {
            return Confirm::new()
                .with_prompt(label)
                .default(false)
                .interact()
                .map_err(|e| PwVaultError::CommandFailed(format!("confirm prompt: {e}")));
        }

        let answer = self.next_line(&format!("{label} [y/N]"))?;
        Ok(matches!(
            answer.as_deref().map(|a| a.trim().to_ascii_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}
