//! Parser for loosely formatted type strings.

/// A type string split into its parts.
///
/// `base_type` is lowercase, trimmed, and never ends with `unsigned`
/// unless `unsigned` is the only token. `args` keeps the textual form and
/// input order of each argument and never contains empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedType {
    /// Base type tokens joined by single spaces, e.g. `"double precision"`.
    pub base_type: String,
    /// Arguments inside the parentheses, e.g. `["10", "2"]` or `["max"]`.
    pub args: Vec<String>,
    /// Whether an `unsigned` modifier followed the base type.
    pub unsigned: bool,
    /// The trimmed input, in its original case.
    pub raw: String,
}

impl ParsedType {
    /// Parses a type string.
    ///
    /// Accepts `<base tokens>+ ( '(' <arg>,* ')' )? <modifier tokens>*`.
    /// Never fails: an unmatched parenthesis leaves the text in the base
    /// token stream, and empty input yields the default value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let raw = input.trim();
        if raw.is_empty() {
            return Self::default();
        }

        let lowered = raw.to_lowercase();
        let (head, args, tail) = split_arguments(&lowered);

        let mut base: Vec<&str> = head.split_whitespace().collect();
        let mut unsigned = false;

        // `int unsigned` strips the modifier, `unsigned int` keeps it.
        if base.len() > 1 && base.last() == Some(&"unsigned") {
            base.pop();
            unsigned = true;
        }

        let tail: Vec<&str> = tail.split_whitespace().collect();
        let mut i = 0;
        while i < tail.len() {
            match tail[i] {
                "unsigned" => {
                    unsigned = true;
                    i += 1;
                }
                "with" | "without" if tail[i + 1..].starts_with(&["time", "zone"]) => {
                    base.extend_from_slice(&tail[i..i + 3]);
                    i += 3;
                }
                _ => i += 1,
            }
        }

        Self {
            base_type: base.join(" "),
            args,
            unsigned,
            raw: raw.to_string(),
        }
    }

    /// Returns whether any argument was supplied.
    #[must_use]
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}

/// Splits `head(args) tail`. Without a well-formed argument list the whole
/// input is returned as the head.
fn split_arguments(s: &str) -> (&str, Vec<String>, &str) {
    let Some(open) = s.find('(') else {
        return (s, Vec::new(), "");
    };
    let Some(close) = s[open..].find(')').map(|offset| open + offset) else {
        return (s, Vec::new(), "");
    };

    let args = s[open + 1..close]
        .split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .map(String::from)
        .collect();

    (&s[..open], args, &s[close + 1..])
}
