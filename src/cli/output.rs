//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-tty output):
//! - Green: success, checkmarks, created items
//! - Red: errors, destroyed items
//! - Yellow: replaced items
//! - Cyan: paths, commands, names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info, unchanged items

use console::{style, StyledObject};
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

fn styled<D>(value: D) -> StyledObject<D> {
    let s = style(value);
    if colors_enabled() {
        s
    } else {
        s.force_styling(false)
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ applied`
pub fn success(msg: &str) {
    println!("{} {}", styled("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ config not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", styled("✗").red(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: saltseal init`
pub fn hint(msg: &str) {
    eprintln!("{} {}", styled("→").cyan(), styled(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", styled(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  id:  5f1e...`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", styled(label).dim(), styled(value).bold());
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", styled("─".repeat(RULE_WIDTH)).dim());
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    styled(p).cyan().to_string()
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    styled(c).green().to_string()
}

/// Format an item name in cyan.
pub fn name(n: &str) -> String {
    styled(n).cyan().to_string()
}

/// Print a dimmed/secondary message.
///
/// Example: `no items in state`
pub fn dimmed(msg: &str) {
    println!("{}", styled(msg).dim());
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}

/// Print one change line with a symbol colored by action.
///
/// Example: `  + deploy_token  create`
pub fn change(symbol: &str, item: &str, action: &str) {
    let sym = match symbol {
        "+" => styled(symbol).green(),
        "~" => styled(symbol).yellow(),
        "-" => styled(symbol).red(),
        _ => styled(symbol).dim(),
    };
    println!("  {} {}  {}", sym, name(item), styled(action).dim());
}
