use crate::ast::Token;

/// Running bracket depth of a scan.
///
/// The tracker never rejects a negative depth; unbalanced input only moves
/// the split points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NestingState {
    bracket_depth: i32,
}

impl NestingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> i32 {
        self.bracket_depth
    }

    pub fn is_top_level(&self) -> bool {
        self.bracket_depth == 0
    }

    /// Feeds one token into the running depth.
    pub fn update(&mut self, token: Token) {
        self.bracket_depth = update(token, self.bracket_depth);
    }
}

/// Depth transition for a single token.
pub fn update(token: Token, depth: i32) -> i32 {
    match token {
        Token::ExpressionStart => depth + 1,
        Token::ExpressionEnd => depth - 1,
        _ => depth,
    }
}
