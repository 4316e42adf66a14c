// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Pistonite

use cu::pre::*;

/// rungame - open the index.html next to this executable in the default browser
#[derive(clap::Parser)]
struct Cli {
    #[clap(flatten)]
    flags: cu::cli::Flags,
}

#[cu::cli(flags = "flags")]
fn main(_cli: Cli) -> cu::Result<()> {
    cu::lv::disable_print_time();
    rungame::run()
}
