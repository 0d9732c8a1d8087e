// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod completion;
pub mod generate;
pub mod init;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
