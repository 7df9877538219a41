//! Documentation content for the ketupa CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Variables,
    Escaping,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "grammar" => Some(Self::Syntax),
            "operators" | "ops" | "operations" => Some(Self::Operators),
            "variables" | "variable" | "vars" => Some(Self::Variables),
            "escaping" | "escape" | "escapes" => Some(Self::Escaping),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"KETUPA PREDICATES

A predicate is a comma-separated list: the operation comes first, the
arguments follow. Arguments are literals, variable references or nested
predicates in braces. Every predicate evaluates to True or False.

DOCUMENTATION CATEGORIES

  syntax            Operation/argument layout and nested predicates
  operators         Every operation with its arity and semantics
  variables         $name references, list indices and bit extraction
  escaping          Using , { } $ [ ] \ inside literals

QUICK REFERENCE

  =, a, b                    Text equality
  <, a, b                    Integer comparison (also >, <=, >=)
  OR, {..}, {..}             Any argument is True
  IN, a, $list               Membership or substring
  $name[0][3]                List element, then bit 3

Run 'ketupa doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Variables) => Ok(VARIABLES_DOC),
        Some(DocCategory::Escaping) => Ok(ESCAPING_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Predicate Layout

GRAMMAR
  expression := operation ("," argument)*
  argument   := literal | variable | "{" expression "}"
  variable   := "$" name ("[" index "]")*

  Whitespace around every piece is ignored. One pair of outer braces
  around the whole predicate is optional:

    =, 42, 42
    {=, 42, 42}

NESTED PREDICATES
  An argument wrapped in braces is a predicate of its own. Its result
  takes part in the outer operation as the text True or False.

    Example:
      Predicate: OR, {=, 11, 21}, {<, 11, 21}
      Result:    True

OPERATION NAMES
  The first piece is always the operation name, even when it starts
  with $ or is wrapped in braces. Unknown names evaluate to False.
"#;

const OPERATORS_DOC: &str = r#"OPERATORS - Operation Table

  Name        Arity   Matching           Result
  ----------  ------  -----------------  ---------------------------------
  NOT         1       case-insensitive   argument is not "True"
  =           2       exact              texts are equal
  < > <= >=   2       exact              integer comparison
  OR          0, 2+   case-insensitive   any argument is exactly "True"
  AND         0, 2+   case-insensitive   no argument is exactly "False"
  IN          2       case-insensitive   A in list B, or A substring of B
  HasFlag     2       case-insensitive   (A & B) == B on 32-bit integers
  Matches     2       case-insensitive   A matches regex B
  StartsWith  2       case-insensitive   A starts with B
  EndsWith    2       case-insensitive   A ends with B

NOTES
  - Comparisons with an operand that is not an integer are False.
  - OR and AND with no arguments are True; with one argument they are
    unknown and therefore False.
  - An invalid regular expression makes Matches False.
  - Any operation with the wrong number of arguments is False.

EXAMPLES
  HasFlag, 181, 5          True
  HasFlag, 181, 8          False
  IN, plexT, complexText   True
  IN, , hello              True
  IN, hello,               False
"#;

const VARIABLES_DOC: &str = r#"VARIABLES - References and Indices

REFERENCES
  $name
    The bound value. Missing variables are null: null never equals
    anything (another null included) and fails every numeric comparison.

INDICES
  $name[i][j]
    Indices apply left to right. Each index must be a 32-bit integer,
    otherwise the predicate fails to prepare.

    On a list the index selects an element; negative or out-of-range
    indices give null.

    On an integer-like value the index selects one bit (0..63) and
    yields 0 or 1.

    Example:
      Bindings:  {"flags": 5}
      Predicate: =, $flags[2], 1
      Result:    True

BINDING FROM THE COMMAND LINE
  --var name=value      Binds text
  --input '{"n": 5}'    Binds typed JSON values (also read from stdin)
"#;

const ESCAPING_DOC: &str = r#"ESCAPING - Structural Characters in Literals

  A backslash in front of , { } $ [ ] or \ makes that character plain
  text. The backslash is removed from literal arguments.

    Example:
      Bindings:  {"var1": "4{}$,\\2"}
      Predicate: =, $var1, 4\{\}$\,\\2
      Result:    True

  A backslash in front of any other character is kept as written.
"#;
