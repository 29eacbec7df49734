//! Path expressions: `$` followed by `.name`, `[index]`, `['name']` and
//! wildcard steps.
//!
//! # Grammar
//!
//! - `$` -- the root marker, required as the first character
//! - `.name` -- member access; the name runs until the next `.`, `[` or the
//!   end of input
//! - `.*` / `[*]` -- every element of an array or every value of an object
//! - `[3]` / `[-1]` -- index access; negative indices parse but never match
//! - `['a.b']` / `["a b"]` -- member access for names containing separators;
//!   `\\`, `\'` and `\"` are the recognised escapes
//!
//! Parsing is a single left-to-right scan. The first violation is reported
//! as [`JsonError::MalformedPath`] with its byte offset.

use crate::error::{JsonError, Result};
use std::fmt;
use std::str::FromStr;

/// One navigation instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// The named entry of an object.
    Member(String),
    /// The element at a position of an array.
    Index(i64),
    /// Every child of an array or object, in document order.
    Wildcard,
}

/// A parsed path expression: the root followed by zero or more steps.
///
/// ```
/// use jsoncons_core::{Path, Step};
///
/// let path: Path = "$.key[1]".parse().unwrap();
/// assert_eq!(path.steps(), [Step::Member("key".into()), Step::Index(1)]);
/// assert_eq!(path.to_string(), "$.key[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// Parse a path string.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError::MalformedPath`] when the string is missing the
    /// root marker, has an empty member name, an unterminated or non-numeric
    /// bracket, or any other character where a step must begin.
    pub fn parse(input: &str) -> Result<Self> {
        Scanner::new(input).parse()
    }

    /// Build a path from already-constructed steps.
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// `true` for the bare root path `$`.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether evaluating this path can yield more than one match.
    pub fn has_fan_out(&self) -> bool {
        self.steps.iter().any(|step| matches!(step, Step::Wildcard))
    }
}

impl FromStr for Path {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Canonical form of one step: `.name` for plain names, `['...']` otherwise.
impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Member(name) if is_plain_name(name) => write!(f, ".{name}"),
            Step::Member(name) => {
                f.write_str("['")?;
                for c in name.chars() {
                    if c == '\'' || c == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str("']")
            }
            Step::Index(index) => write!(f, "[{index}]"),
            Step::Wildcard => f.write_str("[*]"),
        }
    }
}

/// Names that round-trip through the dotted form.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "*"
        && !name.contains(['.', '[', ']', '\'', '"', '\\'])
        && !name.chars().any(char::is_whitespace)
}

/// Cursor over the path string. `pos` is always a byte offset on a char
/// boundary: it only advances past ASCII delimiters or to positions found
/// by scanning for them.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn parse(mut self) -> Result<Path> {
        if self.peek() != Some(b'$') {
            return Err(JsonError::malformed(0, "path must start with '$'"));
        }
        self.pos = 1;

        let mut steps = Vec::new();
        while let Some(byte) = self.peek() {
            let step = match byte {
                b'.' => self.dotted_member()?,
                b'[' => self.bracket()?,
                _ => {
                    let found = self.input[self.pos..].chars().next().unwrap_or_default();
                    return Err(JsonError::malformed(
                        self.pos,
                        format!("expected '.' or '[', found '{found}'"),
                    ));
                }
            };
            steps.push(step);
        }
        Ok(Path { steps })
    }

    /// `.name` or `.*`; the cursor sits on the dot.
    fn dotted_member(&mut self) -> Result<Step> {
        let start = self.pos + 1;
        let end = self.input[start..]
            .find(['.', '['])
            .map_or(self.input.len(), |offset| start + offset);
        let name = &self.input[start..end];
        if name.is_empty() {
            return Err(JsonError::malformed(start, "empty member name"));
        }
        self.pos = end;
        Ok(match name {
            "*" => Step::Wildcard,
            _ => Step::Member(name.to_string()),
        })
    }

    /// `[index]`, `[*]` or `['name']`; the cursor sits on the `[`.
    fn bracket(&mut self) -> Result<Step> {
        let open = self.pos;
        self.pos += 1;
        match self.peek() {
            None => Err(JsonError::malformed(open, "unterminated bracket")),
            Some(quote @ (b'\'' | b'"')) => {
                let name = self.quoted(open, char::from(quote))?;
                self.expect_close()?;
                Ok(Step::Member(name))
            }
            Some(b'*') => {
                self.pos += 1;
                self.expect_close()?;
                Ok(Step::Wildcard)
            }
            Some(_) => self.index(open),
        }
    }

    fn index(&mut self, open: usize) -> Result<Step> {
        let start = self.pos;
        let close = self.input[start..]
            .find(']')
            .map(|offset| start + offset)
            .ok_or_else(|| JsonError::malformed(open, "unterminated bracket"))?;
        let token = &self.input[start..close];

        let digits = token.strip_prefix('-').unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(JsonError::malformed(
                start,
                format!("invalid array index '{token}'"),
            ));
        }
        let index: i64 = token
            .parse()
            .map_err(|_| JsonError::malformed(start, format!("array index '{token}' out of range")))?;

        self.pos = close + 1;
        Ok(Step::Index(index))
    }

    /// A quoted member name; the cursor sits on the opening quote.
    fn quoted(&mut self, open: usize, quote: char) -> Result<String> {
        let body = self.pos + 1;
        let mut name = String::new();
        let mut chars = self.input[body..].char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, escaped @ ('\\' | '\'' | '"'))) => name.push(escaped),
                    Some((at, other)) => {
                        return Err(JsonError::malformed(
                            body + at,
                            format!("unsupported escape '\\{other}'"),
                        ));
                    }
                    None => break,
                },
                c if c == quote => {
                    self.pos = body + offset + c.len_utf8();
                    return Ok(name);
                }
                c => name.push(c),
            }
        }
        Err(JsonError::malformed(open, "unterminated quoted name"))
    }

    fn expect_close(&mut self) -> Result<()> {
        if self.peek() == Some(b']') {
            self.pos += 1;
            Ok(())
        } else {
            Err(JsonError::malformed(self.pos, "expected ']'"))
        }
    }
}
