/// Operations understood by the evaluator.
///
/// Name matching is intentionally uneven: `=` and the numeric comparisons
/// match exactly, every named operation matches ASCII case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    // Unary
    /// Negation (`NOT`)
    Not,

    // Comparison
    /// Text equality (`=`)
    Equal,
    /// Numeric less than (`<`)
    LessThan,
    /// Numeric greater than (`>`)
    GreaterThan,
    /// Numeric less than or equal (`<=`)
    LessEqual,
    /// Numeric greater than or equal (`>=`)
    GreaterEqual,

    // Logical
    /// Any argument is `True` (`OR`)
    Or,
    /// No argument is `False` (`AND`)
    And,

    // Text and bits
    /// Containment or membership (`IN`)
    In,
    /// All bits of the mask are set (`HasFlag`)
    HasFlag,
    /// Regular expression match (`Matches`)
    Matches,
    /// Prefix test (`StartsWith`)
    StartsWith,
    /// Suffix test (`EndsWith`)
    EndsWith,
}

impl Operator {
    /// Resolves an operation name for the given number of arguments.
    ///
    /// Returns `None` when the name is unknown or not defined for `arity`.
    ///
    /// ```
    /// use ketupa_predicates::Operator;
    ///
    /// assert_eq!(Operator::lookup("hasflag", 2), Some(Operator::HasFlag));
    /// assert_eq!(Operator::lookup("NOT", 2), None);
    /// assert_eq!(Operator::lookup("or", 0), Some(Operator::Or));
    /// ```
    pub fn lookup(name: &str, arity: usize) -> Option<Operator> {
        let named = |candidate: &str| name.eq_ignore_ascii_case(candidate);

        match arity {
            1 if named("NOT") => Some(Operator::Not),
            2 => match name {
                "=" => Some(Operator::Equal),
                "<" => Some(Operator::LessThan),
                ">" => Some(Operator::GreaterThan),
                "<=" => Some(Operator::LessEqual),
                ">=" => Some(Operator::GreaterEqual),
                _ if named("OR") => Some(Operator::Or),
                _ if named("AND") => Some(Operator::And),
                _ if named("IN") => Some(Operator::In),
                _ if named("HasFlag") => Some(Operator::HasFlag),
                _ if named("Matches") => Some(Operator::Matches),
                _ if named("StartsWith") => Some(Operator::StartsWith),
                _ if named("EndsWith") => Some(Operator::EndsWith),
                _ => None,
            },
            1 => None,
            // zero arguments and three or more only fold OR/AND
            _ if named("OR") => Some(Operator::Or),
            _ if named("AND") => Some(Operator::And),
            _ => None,
        }
    }

    /// Canonical spelling, used by traces and docs.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Not => "NOT",
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::Or => "OR",
            Operator::And => "AND",
            Operator::In => "IN",
            Operator::HasFlag => "HasFlag",
            Operator::Matches => "Matches",
            Operator::StartsWith => "StartsWith",
            Operator::EndsWith => "EndsWith",
        }
    }
}
