// SPDX-License-Identifier: Unlicense
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiOpKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl BiOpKind {
    pub fn symbol(self) -> char {
        match self {
            BiOpKind::Add => '+',
            BiOpKind::Sub => '-',
            BiOpKind::Mul => '*',
            BiOpKind::Div => '/',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(BiOpKind::Add),
            '-' => Some(BiOpKind::Sub),
            '*' => Some(BiOpKind::Mul),
            '/' => Some(BiOpKind::Div),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Integer(i64),
    Identifier(String),
    BinaryOp(BiOpKind, Id, Id),
    /// Target name and right-hand side.
    Assignment(String, Id),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
}

pub type Id = id_arena::Id<Node>;
pub type Arena = id_arena::Arena<Node>;

/// A parsed assignment. Every node id appears as the child of exactly one
/// parent, and the arena is never handed out mutably.
#[derive(Debug)]
pub struct SyntaxTree {
    arena: Arena,
    root: Id,
}

impl SyntaxTree {
    pub(crate) fn new(arena: Arena, root: Id) -> Self {
        Self { arena, root }
    }

    pub fn root(&self) -> Id {
        self.root
    }

    /// Ids only come from this tree's arena, so lookups cannot miss.
    pub fn node(&self, id: Id) -> &Node {
        &self.arena[id]
    }

    pub fn kind(&self, id: Id) -> &NodeKind {
        &self.node(id).kind
    }

    /// Number of AST nodes, the assignment included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Name on the left of `=`, when the root is an assignment.
    pub fn target(&self) -> Option<&str> {
        match self.kind(self.root) {
            NodeKind::Assignment(target, _) => Some(target),
            _ => None,
        }
    }
}

// Pending output while printing; left-deep chains can be far deeper than the call stack.
enum Step {
    Visit(Id),
    Operator(char),
    Close,
}

impl fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Step::Visit(self.root)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(id) => match self.kind(id) {
                    NodeKind::Integer(n) => write!(f, "(INTEGER: {})", n)?,
                    NodeKind::Identifier(name) => write!(f, "(IDENTIFIER: {})", name)?,
                    NodeKind::BinaryOp(op, lhs, rhs) => {
                        f.write_str("(")?;
                        stack.extend([
                            Step::Close,
                            Step::Visit(*rhs),
                            Step::Operator(op.symbol()),
                            Step::Visit(*lhs),
                        ]);
                    }
                    NodeKind::Assignment(target, expr) => {
                        write!(f, "({} = ", target)?;
                        stack.extend([Step::Close, Step::Visit(*expr)]);
                    }
                },
                Step::Operator(op) => write!(f, " {} ", op)?,
                Step::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}
