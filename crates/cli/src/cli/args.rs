// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

use crate::config::Overrides;

/// Release range and branch overrides.
#[derive(Args, Clone, Debug, Default)]
pub struct ReleaseArgs {
    /// Branch pull requests must be merged into
    #[arg(long, short = 'b')]
    pub branch: Option<String>,

    /// Tag (or branch) marking the previous release
    #[arg(long = "from", value_name = "ref")]
    pub from_tag: Option<String>,

    /// Tag (or branch) marking this release
    #[arg(long = "to", value_name = "ref")]
    pub to_tag: Option<String>,
}

impl ReleaseArgs {
    /// Config overrides for these arguments plus an output path.
    pub fn overrides(self, output: Option<String>) -> Overrides {
        Overrides {
            branch: self.branch,
            from_tag: self.from_tag,
            to_tag: self.to_tag,
            output,
        }
    }
}
