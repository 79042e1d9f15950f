//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every menu action.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::vault::RecordSummary;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Build the listing table (#, Site, Username).  Passwords never appear.
pub fn records_table(records: &[RecordSummary]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Site", "Username"]);

    for r in records {
        table.add_row(vec![r.index.to_string(), r.site.clone(), r.username.clone()]);
    }

    table
}

/// Print the listing table, or a hint when the vault is empty.
pub fn print_records_table(records: &[RecordSummary]) {
    if records.is_empty() {
        info("No records in this vault yet.");
        tip("Choose `add` to store your first password.");
        return;
    }

    println!("{}", records_table(records));
}
