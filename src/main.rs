// CCAL - A semantic analyser and three-address code generator for CCAL
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! CCAL Compiler CLI
//!
//! Checks a CCAL program and writes its three-address code.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ccal::error::format_warning;

/// Extension a source file must carry.
const SOURCE_EXTENSION: &str = "ccl";

/// Output file used when `--output` is not given.
const DEFAULT_OUTPUT: &str = "output.tac";

/// CCAL - A semantic analyser and three-address code generator
#[derive(Parser, Debug)]
#[command(name = "ccal")]
#[command(author = "Marcel Joachim Kloubert")]
#[command(version)]
#[command(about = "A semantic analyser and three-address code generator for CCAL")]
#[command(long_about = r#"
ccal checks a CCAL program for semantic errors and, if there are none,
lowers it to three-address code.

Errors stop compilation. Warnings are reported but code is still written.

Example usage:
  ccal program.ccl
  ccal program.ccl -o program.tac
  ccal program.ccl -v
"#)]
struct Cli {
    /// Source file to compile (.ccl)
    source_file: PathBuf,

    /// Output file for the generated code
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !has_source_extension(&cli.source_file) {
        eprintln!(
            "Error: Unknown source format: {}. Use the .{} extension.",
            cli.source_file.display(),
            SOURCE_EXTENSION
        );
        return ExitCode::from(2);
    }

    if cli.verbose {
        println!("{} Compiler v{}", ccal::NAME, ccal::VERSION);
        println!("Source: {}", cli.source_file.display());
        println!("Output: {}", cli.output.display());
        println!();
        println!("Reading {}...", cli.source_file.display());
    }

    let source = match std::fs::read_to_string(&cli.source_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source_file.display(), e);
            return ExitCode::from(3);
        }
    };

    let filename = cli
        .source_file
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>");

    if cli.verbose {
        println!("Compiling...");
    }

    let compilation = match ccal::compile(&source) {
        Ok(compilation) => compilation,
        Err(failure) => {
            eprint!("{}", failure.format_all(&source, Some(filename)));
            eprintln!(
                "Error: {} error(s) found, no code generated",
                failure.errors.len()
            );
            return ExitCode::from(1);
        }
    };

    // Print warnings (they don't prevent compilation)
    for warning in &compilation.warnings {
        eprint!("{}", format_warning(warning, &source, Some(filename)));
    }

    if cli.verbose {
        println!(
            "Generated {} instructions",
            compilation.code.lines().count()
        );
        println!("Writing {}...", cli.output.display());
    }

    if let Err(e) = std::fs::write(&cli.output, &compilation.code) {
        eprintln!("Error: Cannot write {}: {}", cli.output.display(), e);
        return ExitCode::from(3);
    }

    if cli.verbose {
        println!("Done!");
    } else {
        println!("Compiled {} -> {}", filename, cli.output.display());
    }

    ExitCode::SUCCESS
}
