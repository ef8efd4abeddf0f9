//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{ColoredString, Colorize};

use crate::domain::{Category, Term};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

fn category_tag(category: Category) -> ColoredString {
    let tag = format!("[{}]", category);
    match category {
        Category::Gene => tag.green(),
        Category::Attribute => tag.blue(),
        Category::Facs => tag.magenta(),
        Category::Invalid => tag.dimmed(),
    }
}

/// Print one suggestion slot; placeholders render as a dimmed dash
pub fn slot(position: usize, term: &Term) {
    if term.is_placeholder() {
        println!("{:>2}. {}", position, "-".dimmed());
    } else {
        println!("{:>2}. {} {}", position, term.value, category_tag(term.category));
    }
}

/// Print a match with its edit distance
pub fn scored(distance: usize, term: &Term) {
    println!(
        "{} {} {}",
        format!("d={distance}").yellow(),
        term.value,
        category_tag(term.category)
    );
}

/// Print a lookup result
pub fn category(name: &str, category: Category) {
    println!("{}: {}", name, category_tag(category));
}
