// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt::Display;

use style::{BOLD, ERROR, LABEL};

mod style;

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}

/// Prints an aligned `label: value` line.
pub fn print_field(label: &str, value: impl Display) {
    println!("  {LABEL}{label:<24}{LABEL:#} {value}");
}

pub fn print_optional(label: &str, value: Option<impl Display>) {
    match value {
        Some(value) => print_field(label, value),
        None => print_field(label, "-"),
    }
}

pub fn print_heading(heading: impl Display) {
    println!("{BOLD}{heading}{BOLD:#}");
}
