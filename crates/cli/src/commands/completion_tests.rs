// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    bash = { Shell::Bash, "_clog()" },
    zsh = { Shell::Zsh, "#compdef clog" },
    fish = { Shell::Fish, "complete -c clog" },
)]
fn script_names_the_binary(shell: Shell, marker: &str) {
    let mut out = Vec::new();
    write_script(shell, &mut out).unwrap();
    let script = String::from_utf8(out).unwrap();
    assert!(script.contains(marker), "missing {:?} in:\n{}", marker, script);
    assert!(script.contains("generate"));
}
