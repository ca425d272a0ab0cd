// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The bzl Project
// SPDX-FileName: crates/bzl-cli/src/main.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! bzl CLI
//!
//! Command-line interface for the bzl BUILD file toolkit.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Parse and inspect Bazel BUILD files
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Show verbose output
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse BUILD files and report the first syntax error in each
    Check {
        /// Files to check; `-` reads from standard input
        #[clap(value_parser, required = true)]
        files: Vec<PathBuf>,
    },
    /// Parse one BUILD file and print its syntax tree
    Dump {
        /// File to dump; `-` reads from standard input
        #[clap(value_parser)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match args.command {
        Command::Check { files } => commands::check::execute(&files, args.verbose),
        Command::Dump { file } => commands::dump::execute(&file),
    }
}
