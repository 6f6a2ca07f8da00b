// SPDX-License-Identifier: Unlicense
use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::{ast::SyntaxTree, error::Error, lexer, options::SyntaxOptions, parser, render};
use anyhow::{anyhow, Result};

pub const DEFAULT_DOT_FILE: &str = "syntax_tree.dot";

pub fn read_source(source: &Path) -> Result<String> {
    let mut buf = String::new();
    let mut f = std::fs::File::open(source)
        .map_err(|e| anyhow!("failed to open {}: {}", source.display(), e))?;
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

pub fn check_syntax(source: &str, options: &SyntaxOptions) -> Result<SyntaxTree, Error> {
    let tokens = lexer::tokenize_with(source, options)?;
    let tree = parser::parse_with(&tokens, options)?;
    Ok(tree)
}

/// Everything printed or written for an accepted statement.
#[derive(Debug)]
pub struct Report {
    pub tree: SyntaxTree,
    pub summary: String,
    pub outline: Vec<String>,
    pub dot: String,
}

pub fn report(source: &str, options: &SyntaxOptions) -> Result<Report, Error> {
    let tree = check_syntax(source, options)?;
    Ok(Report {
        summary: tree.to_string(),
        outline: render::text_lines(&tree),
        dot: render::to_dot(&tree),
        tree,
    })
}

pub fn write_dot_file(dot: &str, output: &Path) -> Result<PathBuf> {
    std::fs::write(output, dot)
        .map_err(|e| anyhow!("failed to write {}: {}", output.display(), e))?;
    Ok(output.to_path_buf())
}
