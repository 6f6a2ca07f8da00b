// SPDX-License-Identifier: Unlicense
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use assign_syntax::{driver, SyntaxOptions};

struct Args {
    options: SyntaxOptions,
    output: PathBuf,
    source: Option<String>,
}

fn parse_args() -> Result<Args> {
    let output = std::env::var("SYNTAXCHECK_DOT").unwrap_or(driver::DEFAULT_DOT_FILE.into());
    let mut args = Args {
        options: SyntaxOptions::default(),
        output: PathBuf::from(output),
        source: None,
    };
    let mut words = Vec::new();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--skip-newlines" => args.options.skip_newlines = true,
            "--strict" => args.options = SyntaxOptions::strict(),
            "-f" => {
                let path = iter.next().ok_or(anyhow!("-f needs a file name"))?;
                args.source = Some(driver::read_source(Path::new(&path))?);
            }
            "-o" => {
                let path = iter.next().ok_or(anyhow!("-o needs a file name"))?;
                args.output = PathBuf::from(path);
            }
            _ => words.push(arg),
        }
    }
    if !words.is_empty() && args.source.is_none() {
        args.source = Some(words.join(" "));
    }
    Ok(args)
}

fn prompt() -> Result<String> {
    print!("Enter your code: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let source = match args.source {
        Some(source) => source,
        None => prompt()?,
    };

    match driver::report(&source, &args.options) {
        Ok(report) => {
            println!("{}", report.summary);
            for line in &report.outline {
                println!("{}", line);
            }
            driver::write_dot_file(&report.dot, &args.output)?;
            println!("Syntax is acceptable. Dot file is created.");
            Ok(())
        }
        Err(e) => {
            eprintln!("Syntax error: {}", e);
            std::process::exit(1);
        }
    }
}
