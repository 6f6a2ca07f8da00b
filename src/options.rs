// SPDX-License-Identifier: Unlicense

/// Knobs for the lexer and parser. `Default` keeps the lenient behaviour:
/// newlines are illegal, any operator is accepted as `=`, and tokens after
/// the statement are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyntaxOptions {
    /// Treat `\n` and `\r` as whitespace.
    pub skip_newlines: bool,
    /// Require the literal `=` after the assignment target.
    pub strict_assignment: bool,
    /// Reject tokens left over after the optional `;`.
    pub require_end_of_input: bool,
}

impl SyntaxOptions {
    pub fn strict() -> Self {
        Self {
            skip_newlines: true,
            strict_assignment: true,
            require_end_of_input: true,
        }
    }
}
