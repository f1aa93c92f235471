//! Callable shape descriptors.
//!
//! A [`Signature`] is what a caller declares for a slot: ordered parameter types and one return
//! type. Signatures can be built in code, parsed from a compact text form, or decoded from JSON.
//!
//! Text form:
//!
//! ```text
//! type := int64 | float64 | bool | utf8 | "[" type "]" | fn "(" [type {"," type}] ")" "->" type
//! ```
//!
//! `i64`/`int`, `f64`/`float` and `string`/`str` are accepted as aliases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HofError, HofResult};
use crate::types::DataType;

/// Ordered parameter types plus a return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    /// Parameter types, in call order.
    pub params: Vec<DataType>,
    /// Return type.
    pub returns: DataType,
}

impl Signature {
    /// Create a new signature.
    pub fn new(params: Vec<DataType>, returns: DataType) -> Self {
        Self { params, returns }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Decode a signature from its JSON form.
    ///
    /// ```rust
    /// use rust_hof::signature::Signature;
    ///
    /// let sig = Signature::from_json(
    ///     r#"{"params": [{"function": {"params": ["int64"], "returns": "bool"}}, {"sequence": "int64"}],
    ///         "returns": {"sequence": "int64"}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(sig.to_string(), "fn(fn(int64) -> bool, [int64]) -> [int64]");
    /// ```
    pub fn from_json(input: &str) -> HofResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Encode this signature as JSON.
    pub fn to_json(&self) -> HofResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, p) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

impl FromStr for Signature {
    type Err = HofError;

    fn from_str(s: &str) -> HofResult<Self> {
        let mut parser = Parser::new(s);
        parser.skip_ws();
        let start = parser.pos;
        if parser.ident() != "fn" {
            return Err(parser.error_at(start, "expected 'fn'"));
        }
        let sig = parser.fn_tail()?;
        parser.finish()?;
        Ok(sig)
    }
}

impl FromStr for DataType {
    type Err = HofError;

    fn from_str(s: &str) -> HofResult<Self> {
        let mut parser = Parser::new(s);
        let t = parser.data_type()?;
        parser.finish()?;
        Ok(t)
    }
}

/// Deepest type nesting the text parser accepts; matches `serde_json`'s recursion limit.
const MAX_DEPTH: usize = 128;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn eat(&mut self, token: &str) -> bool {
        self.skip_ws();
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str) -> HofResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error_at(self.pos, format!("expected '{token}'")))
        }
    }

    fn ident(&mut self) -> &'a str {
        self.skip_ws();
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn data_type(&mut self) -> HofResult<DataType> {
        self.skip_ws();
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at(self.pos, "type nested too deeply"));
        }
        self.depth += 1;
        let t = self.nested_type();
        self.depth -= 1;
        t
    }

    fn nested_type(&mut self) -> HofResult<DataType> {
        if self.eat("[") {
            let inner = self.data_type()?;
            self.expect("]")?;
            return Ok(DataType::sequence_of(inner));
        }

        let start = self.pos;
        match self.ident() {
            "int64" | "i64" | "int" => Ok(DataType::Int64),
            "float64" | "f64" | "float" => Ok(DataType::Float64),
            "bool" => Ok(DataType::Bool),
            "utf8" | "string" | "str" => Ok(DataType::Utf8),
            "fn" => Ok(DataType::Function(Box::new(self.fn_tail()?))),
            "" => Err(self.error_at(start, "expected a type")),
            other => Err(self.error_at(start, format!("unknown type '{other}'"))),
        }
    }

    // Everything after the `fn` keyword.
    fn fn_tail(&mut self) -> HofResult<Signature> {
        self.expect("(")?;
        let mut params = Vec::new();
        if !self.eat(")") {
            loop {
                params.push(self.data_type()?);
                if self.eat(",") {
                    continue;
                }
                self.expect(")")?;
                break;
            }
        }
        self.expect("->")?;
        let returns = self.data_type()?;
        Ok(Signature::new(params, returns))
    }

    fn finish(&mut self) -> HofResult<()> {
        self.skip_ws();
        if self.pos == self.src.len() {
            Ok(())
        } else {
            Err(self.error_at(self.pos, "unexpected trailing input"))
        }
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> HofError {
        HofError::InvalidSignature {
            offset,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::error::HofError;
    use crate::types::DataType;

    #[test]
    fn parses_map_shape() {
        let sig: Signature = "fn(fn(int64) -> utf8, [int64]) -> [utf8]".parse().unwrap();
        assert_eq!(sig.arity(), 2);
        assert_eq!(
            sig.params[0],
            DataType::function(vec![DataType::Int64], DataType::Utf8)
        );
        assert_eq!(sig.params[1], DataType::sequence_of(DataType::Int64));
        assert_eq!(sig.returns, DataType::sequence_of(DataType::Utf8));
    }

    #[test]
    fn aliases_and_whitespace_are_accepted() {
        let a: Signature = "fn( fn(string,i64)->string , [ i64 ],str )->string".parse().unwrap();
        let b: Signature = "fn(fn(utf8, int64) -> utf8, [int64], utf8) -> utf8".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn display_round_trips_through_parser() {
        let text = "fn(fn(float64, [bool]) -> float64, [[bool]], float64) -> float64";
        let sig: Signature = text.parse().unwrap();
        assert_eq!(sig.to_string(), text);
    }

    #[test]
    fn zero_arity_function_parses() {
        let t: DataType = "fn() -> bool".parse().unwrap();
        assert_eq!(t, DataType::function(vec![], DataType::Bool));
    }

    #[test]
    fn reports_offset_of_unknown_type() {
        let err = "fn(int64, blob) -> int64".parse::<Signature>().unwrap_err();
        match err {
            HofError::InvalidSignature { offset, message } => {
                assert_eq!(offset, 10);
                assert!(message.contains("unknown type 'blob'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_function_and_trailing_input() {
        assert!("[int64]".parse::<Signature>().is_err());
        assert!("fn(int64) -> int64 extra".parse::<Signature>().is_err());
        assert!("fn(int64 -> int64".parse::<Signature>().is_err());
    }

    #[test]
    fn deep_nesting_is_an_error_not_a_crash() {
        let text = format!(
            "fn({}int64{}) -> int64",
            "[".repeat(200_000),
            "]".repeat(200_000)
        );
        match text.parse::<Signature>().unwrap_err() {
            HofError::InvalidSignature { message, .. } => {
                assert!(message.contains("nested too deeply"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let nested_fn = format!("{}int64", "fn() -> ".repeat(200_000));
        assert!(nested_fn.parse::<DataType>().is_err());
    }

    #[test]
    fn moderate_nesting_still_parses() {
        let text = format!("fn({}int64{}) -> int64", "[".repeat(100), "]".repeat(100));
        let sig: Signature = text.parse().unwrap();
        assert_eq!(sig.to_string(), text);
    }

    #[test]
    fn json_round_trip_and_error() {
        let sig: Signature = "fn(fn(int64, int64) -> int64, [int64]) -> int64".parse().unwrap();
        let json = sig.to_json().unwrap();
        assert_eq!(Signature::from_json(&json).unwrap(), sig);

        let err = Signature::from_json("{\"params\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("json error"));
    }
}
