//! The interactive menu loop.
//!
//! Each pass prints the menu, reads a choice, and dispatches it against
//! the unlocked `VaultStore`.  Errors from an action are reported and the
//! loop continues; only quitting or running out of input ends it.

use tracing::debug;

use crate::cli::clipboard::SessionClipboard;
use crate::cli::generator::generate_password;
use crate::cli::output;
use crate::cli::prompt::Prompt;
use crate::errors::{PwVaultError, Result};
use crate::vault::VaultStore;

/// One menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Show,
    Copy,
    Delete,
    ChangePassword,
    Quit,
}

impl MenuCommand {
    /// Menu entries in display order; an entry's number is its position + 1.
    pub const ALL: [MenuCommand; 7] = [
        MenuCommand::List,
        MenuCommand::Add,
        MenuCommand::Show,
        MenuCommand::Copy,
        MenuCommand::Delete,
        MenuCommand::ChangePassword,
        MenuCommand::Quit,
    ];

    /// Parse a menu choice: its number or its keyword, case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = input.trim().to_ascii_lowercase();

        if let Ok(n) = choice.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied();
        }

        match choice.as_str() {
            "list" | "ls" => Some(Self::List),
            "add" | "new" => Some(Self::Add),
            "show" | "reveal" => Some(Self::Show),
            "copy" | "cp" => Some(Self::Copy),
            "delete" | "del" | "rm" => Some(Self::Delete),
            "passwd" | "change-password" => Some(Self::ChangePassword),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Short description shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List records",
            Self::Add => "Add a record",
            Self::Show => "Show a password",
            Self::Copy => "Copy a password to the clipboard",
            Self::Delete => "Delete a record",
            Self::ChangePassword => "Change master password",
            Self::Quit => "Quit",
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A menu session over an unlocked vault.
pub struct Repl<'a, P: Prompt> {
    store: VaultStore,
    prompt: &'a mut P,
    clipboard: SessionClipboard,
    password_length: usize,
}

impl<'a, P: Prompt> Repl<'a, P> {
    pub fn new(store: VaultStore, prompt: &'a mut P, password_length: usize) -> Self {
        Self {
            store,
            prompt,
            clipboard: SessionClipboard::new(),
            password_length,
        }
    }

    /// Run the loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            print_menu();

            let Some(line) = self.prompt.read_line("Choose an option")? else {
                return Ok(());
            };

            let Some(command) = MenuCommand::parse(&line) else {
                output::warning(&format!("Unknown option '{}'", line.trim()));
                continue;
            };
            debug!(?command, "menu command");

            match self.dispatch(command) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(PwVaultError::UserCancelled) => output::info("Cancelled."),
                Err(e) => output::error(&e.to_string()),
            }
        }
    }

    /// End the session and hand back the vault.
    pub fn into_store(self) -> VaultStore {
        self.store
    }

    fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        match command {
            MenuCommand::List => {
                output::print_records_table(&self.store.list_records());
            }
            MenuCommand::Add => self.add()?,
            MenuCommand::Show => {
                let index = self.read_index()?;
                println!("{}", self.store.reveal_password(index)?);
            }
            MenuCommand::Copy => {
                let index = self.read_index()?;
                let password = self.store.reveal_password(index)?;
                self.clipboard.copy(password)?;
                output::success("Password copied to the clipboard.");
            }
            MenuCommand::Delete => self.delete()?,
            MenuCommand::ChangePassword => self.change_password()?,
            MenuCommand::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<()> {
        let site = self.read_required("Site")?;
        let username = self.read_required("Username")?;

        let password = if self.prompt.confirm("Generate a random password?")? {
            generate_password(self.password_length)?
        } else {
            let bytes = self.prompt.prompt_passphrase("Password")?;
            let text = std::str::from_utf8(&bytes).map_err(|_| {
                PwVaultError::CommandFailed("password is not valid UTF-8".into())
            })?;
            zeroize::Zeroizing::new(text.to_string())
        };

        self.store.add_record(&site, &username, &password)?;
        output::success(&format!(
            "Added '{username}' at '{site}' ({} total)",
            self.store.record_count()
        ));
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let index = self.read_index()?;
        let record = self.store.record(index)?;
        let (site, username) = (record.site.clone(), record.username.clone());

        if !self
            .prompt
            .confirm(&format!("Delete '{username}' at '{site}'?"))?
        {
            return Err(PwVaultError::UserCancelled);
        }

        self.store.delete_record(&site, &username)?;
        output::success(&format!("Deleted '{username}' at '{site}'"));
        Ok(())
    }

    fn change_password(&mut self) -> Result<()> {
        let current = self.prompt.prompt_passphrase("Current master password")?;
        let new = self.prompt.prompt_passphrase("New master password")?;
        let confirm = self.prompt.confirm_passphrase("Confirm new master password")?;

        self.store.change_master_password(&current, &new, &confirm)?;
        output::success("Master password changed.");
        Ok(())
    }

    /// Read a 1-based record number.
    fn read_index(&mut self) -> Result<usize> {
        let line = self.read_required("Record number")?;
        line.trim().parse().map_err(|_| {
            PwVaultError::CommandFailed(format!("'{}' is not a record number", line.trim()))
        })
    }

    /// Read a line, treating end of input as a cancel.
    fn read_required(&mut self, label: &str) -> Result<String> {
        self.prompt
            .read_line(label)?
            .ok_or(PwVaultError::UserCancelled)
    }
}

fn print_menu() {
    println!();
    for (i, command) in MenuCommand::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, command.label());
    }
}
