/// Structural class of a single character.
///
/// Classification is a pure function of one character; every character
/// outside the structural set is [`Token::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Character without special meaning
    None,

    /// Argument separator
    ///
    /// # Examples
    /// ```text
    /// =, 42, 42
    /// ```
    ArgumentSeparator,

    /// Opening brace of a nested expression
    ///
    /// # Examples
    /// ```text
    /// OR, {=, 1, 2}, True
    /// ```
    ExpressionStart,

    /// Closing brace of a nested expression
    ExpressionEnd,

    /// Variable marker
    ///
    /// # Examples
    /// ```text
    /// $var1
    /// $matrix[1][2]
    /// ```
    VariableMarker,

    /// Opening bracket of a variable index
    IndexStart,

    /// Closing bracket of a variable index
    IndexEnd,

    /// Escape character; protects the next character from classification
    ///
    /// # Examples
    /// ```text
    /// =, $text, 4\{\}\,2
    /// ```
    Escape,
}

impl Token {
    /// Classifies one character.
    ///
    /// ```
    /// use ketupa_predicates::Token;
    ///
    /// assert_eq!(Token::classify(','), Token::ArgumentSeparator);
    /// assert_eq!(Token::classify('a'), Token::None);
    /// ```
    pub fn classify(ch: char) -> Token {
        match ch {
            ',' => Token::ArgumentSeparator,
            '{' => Token::ExpressionStart,
            '}' => Token::ExpressionEnd,
            '$' => Token::VariableMarker,
            '[' => Token::IndexStart,
            ']' => Token::IndexEnd,
            '\\' => Token::Escape,
            _ => Token::None,
        }
    }

    /// True for every class except [`Token::None`].
    pub fn is_structural(self) -> bool {
        self != Token::None
    }
}
