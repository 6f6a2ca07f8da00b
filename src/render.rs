// SPDX-License-Identifier: Unlicense
use crate::ast::{self, NodeKind, SyntaxTree};

const INDENT: &str = "  ";

/// Indented outline of the tree, two spaces per level.
pub fn text_lines(tree: &SyntaxTree) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack = vec![(tree.root(), 0)];
    while let Some((id, level)) = stack.pop() {
        let indent = INDENT.repeat(level);
        match tree.kind(id) {
            NodeKind::Integer(n) => lines.push(format!("{}INTEGER: {}", indent, n)),
            NodeKind::Identifier(name) => lines.push(format!("{}IDENTIFIER: {}", indent, name)),
            NodeKind::BinaryOp(op, lhs, rhs) => {
                lines.push(format!("{}OP: {}", indent, op.symbol()));
                stack.push((*rhs, level + 1));
                stack.push((*lhs, level + 1));
            }
            NodeKind::Assignment(target, expr) => {
                lines.push(format!("{}ASSIGNMENT: {} =", indent, target));
                stack.push((*expr, level + 1));
            }
        }
    }
    lines
}

/// Accumulates Graphviz statements. Node names come from a counter, so two
/// nodes never share one even when their labels match.
#[derive(Debug, Default)]
pub struct DotWriter {
    next_id: usize,
    statements: Vec<String>,
}

impl DotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, label: &str) -> String {
        let name = format!("node{}", self.next_id);
        self.next_id += 1;
        self.statements.push(format!("{} [label=\"{}\"];", name, label));
        name
    }

    fn edge(&mut self, from: &str, to: &str) {
        self.statements.push(format!("{} -> {};", from, to));
    }

    /// Emits `id` and its subtree under `parent`. An assignment never gets
    /// an edge from `parent`; it is drawn as a root.
    pub fn write(&mut self, tree: &SyntaxTree, id: ast::Id, parent: &str) {
        let mut stack = vec![(id, parent.to_string())];
        while let Some((id, parent)) = stack.pop() {
            match tree.kind(id) {
                NodeKind::Integer(n) => {
                    let name = self.node(&format!("INTEGER: {}", n));
                    self.edge(&parent, &name);
                }
                NodeKind::Identifier(ident) => {
                    let name = self.node(&format!("IDENTIFIER: {}", ident));
                    self.edge(&parent, &name);
                }
                NodeKind::BinaryOp(op, lhs, rhs) => {
                    let name = self.node(&format!("BINARY_OP: {}", op.symbol()));
                    self.edge(&parent, &name);
                    stack.push((*rhs, name.clone()));
                    stack.push((*lhs, name));
                }
                NodeKind::Assignment(target, expr) => {
                    let name = self.node("ASSIGNMENT: =");
                    let target_name = self.node(&format!("IDENTIFIER: {}", target));
                    self.edge(&name, &target_name);
                    stack.push((*expr, name));
                }
            }
        }
    }

    pub fn into_statements(self) -> Vec<String> {
        self.statements
    }
}

pub fn dot_statements(tree: &SyntaxTree, parent: &str) -> Vec<String> {
    let mut writer = DotWriter::new();
    writer.write(tree, tree.root(), parent);
    writer.into_statements()
}

/// Complete `digraph SyntaxTree { ... }` document, one statement per line.
pub fn to_dot(tree: &SyntaxTree) -> String {
    let mut dot = String::from("digraph SyntaxTree {\n");
    for statement in dot_statements(tree, "root") {
        dot.push_str(&statement);
        dot.push('\n');
    }
    dot.push_str("}\n");
    dot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize, parser::parse};
    use anyhow::Result;

    fn tree(src: &str) -> Result<SyntaxTree> {
        Ok(parse(&tokenize(src)?)?)
    }

    #[test]
    fn text_should_render_simple_assignment() -> Result<()> {
        assert_eq!(text_lines(&tree("x = 5;")?), vec!["ASSIGNMENT: x =", "  INTEGER: 5"]);
        Ok(())
    }

    #[test]
    fn text_should_indent_by_depth() -> Result<()> {
        let lines = text_lines(&tree("y = (a + 1) * 2")?);
        assert_eq!(
            lines,
            vec![
                "ASSIGNMENT: y =",
                "  OP: *",
                "    OP: +",
                "      IDENTIFIER: a",
                "      INTEGER: 1",
                "    INTEGER: 2",
            ]
        );
        Ok(())
    }

    #[test]
    fn dot_should_emit_nodes_and_edges() -> Result<()> {
        let statements = dot_statements(&tree("x = a - 3;")?, "root");
        assert_eq!(
            statements,
            vec![
                "node0 [label=\"ASSIGNMENT: =\"];",
                "node1 [label=\"IDENTIFIER: x\"];",
                "node0 -> node1;",
                "node2 [label=\"BINARY_OP: -\"];",
                "node0 -> node2;",
                "node3 [label=\"IDENTIFIER: a\"];",
                "node2 -> node3;",
                "node4 [label=\"INTEGER: 3\"];",
                "node2 -> node4;",
            ]
        );
        Ok(())
    }

    #[test]
    fn dot_should_count_one_extra_node_for_target() -> Result<()> {
        for src in ["x = 1", "x = 2 + 3 * 4;", "v = (a - b) / (c + d * e) - 7"] {
            let tree = tree(src)?;
            let statements = dot_statements(&tree, "root");
            let nodes = statements.iter().filter(|s| s.contains("[label=")).count();
            let edges = statements.iter().filter(|s| s.contains(" -> ")).count();
            assert_eq!(nodes, tree.len() + 1);
            assert_eq!(edges, nodes - 1);
            assert!(statements.iter().all(|s| !s.starts_with("root")));
        }
        Ok(())
    }

    // Runs on a small stack so a per-level recursion would overflow.
    #[test]
    fn renderers_should_handle_long_chains() -> Result<()> {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| -> Result<()> {
                let terms = 20_000;
                let chain = tree(&format!("x = 1{};", " - 1".repeat(terms)))?;
                assert_eq!(chain.len(), 2 * terms + 2);

                let statements = dot_statements(&chain, "root");
                assert_eq!(statements.len(), 2 * (chain.len() + 1) - 1);
                assert_eq!(statements[3], "node2 [label=\"BINARY_OP: -\"];");

                let repr = chain.to_string();
                assert!(repr.starts_with("(x = ((((("));
                assert!(repr.ends_with(" - (INTEGER: 1)))"));

                // Indentation grows with depth, so the outline uses a shorter chain.
                let lines = text_lines(&tree(&format!("x = 1{};", " - 1".repeat(4_000)))?);
                assert_eq!(lines.len(), 8_002);
                assert_eq!(lines[1], "  OP: -");
                assert_eq!(lines.last().map(String::as_str), Some("    INTEGER: 1"));
                Ok(())
            })?;
        handle.join().map_err(|_| anyhow::anyhow!("render thread panicked"))?
    }

    #[test]
    fn dot_should_wrap_document() -> Result<()> {
        let dot = to_dot(&tree("x = 5")?);
        assert_eq!(
            dot,
            "digraph SyntaxTree {\n\
             node0 [label=\"ASSIGNMENT: =\"];\n\
             node1 [label=\"IDENTIFIER: x\"];\n\
             node0 -> node1;\n\
             node2 [label=\"INTEGER: 5\"];\n\
             node0 -> node2;\n\
             }\n"
        );
        Ok(())
    }
}
