// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use clogrs::Cli;

fn main() {
    let cli = Cli::parse();
    clogrs::logging::init(cli.verbose);
    if let Err(e) = clogrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
