//! Core data model for runtime synthesis.
//!
//! Synthesized callables move [`Value`]s around. Every value carries a [`DataType`] tag drawn
//! from a small closed set, which is what the synthesizer inspects when it binds a shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;

/// Logical type of a value or of a signature slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Homogeneous sequence of the inner type.
    Sequence(Box<DataType>),
    /// Callable of the given shape.
    Function(Box<Signature>),
}

impl DataType {
    /// `[element]`.
    pub fn sequence_of(element: DataType) -> Self {
        Self::Sequence(Box::new(element))
    }

    /// `fn(params...) -> ret`.
    pub fn function(params: Vec<DataType>, ret: DataType) -> Self {
        Self::Function(Box::new(Signature::new(params, ret)))
    }

    /// Element type if this is a sequence type.
    pub fn element_type(&self) -> Option<&DataType> {
        match self {
            Self::Sequence(inner) => Some(inner),
            _ => None,
        }
    }

    /// Signature if this is a function type.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Self::Function(sig) => Some(sig),
            _ => None,
        }
    }

    /// The zero value of this type.
    ///
    /// Function types have no zero value.
    pub fn zero_value(&self) -> Option<Value> {
        match self {
            Self::Int64 => Some(Value::Int64(0)),
            Self::Float64 => Some(Value::Float64(0.0)),
            Self::Bool => Some(Value::Bool(false)),
            Self::Utf8 => Some(Value::Utf8(String::new())),
            Self::Sequence(inner) => Some(Value::Sequence(Sequence::empty((**inner).clone()))),
            Self::Function(_) => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64 => f.write_str("int64"),
            Self::Float64 => f.write_str("float64"),
            Self::Bool => f.write_str("bool"),
            Self::Utf8 => f.write_str("utf8"),
            Self::Sequence(inner) => write!(f, "[{inner}]"),
            Self::Function(sig) => write!(f, "{sig}"),
        }
    }
}

/// A single typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
    /// Typed sequence.
    Sequence(Sequence),
    /// Callable value.
    Function(Callable),
}

impl Value {
    /// The type tag of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int64(_) => DataType::Int64,
            Self::Float64(_) => DataType::Float64,
            Self::Bool(_) => DataType::Bool,
            Self::Utf8(_) => DataType::Utf8,
            Self::Sequence(seq) => DataType::sequence_of(seq.element_type().clone()),
            Self::Function(callable) => DataType::Function(Box::new(callable.signature().clone())),
        }
    }

    /// Returns `true` if this value can be passed where `expected` is declared.
    pub fn conforms_to(&self, expected: &DataType) -> bool {
        match (self, expected) {
            (Self::Int64(_), DataType::Int64)
            | (Self::Float64(_), DataType::Float64)
            | (Self::Bool(_), DataType::Bool)
            | (Self::Utf8(_), DataType::Utf8) => true,
            (Self::Sequence(seq), DataType::Sequence(inner)) => seq.element_type() == &**inner,
            (Self::Function(callable), DataType::Function(sig)) => callable.signature() == &**sig,
            _ => false,
        }
    }

    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float64(&self) -> Option<f64> {
        match self {
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_utf8(&self) -> Option<&str> {
        match self {
            Self::Utf8(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            Self::Function(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Utf8(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Utf8(v.to_string())
    }
}

impl From<Sequence> for Value {
    fn from(v: Sequence) -> Self {
        Self::Sequence(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Self::Function(v)
    }
}

/// Ordered, homogeneous collection of [`Value`]s.
///
/// The element type is stored alongside the items so an empty sequence is still typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    element_type: DataType,
    items: Vec<Value>,
}

impl Sequence {
    /// Create a sequence, checking that every item has `element_type`.
    pub fn new(element_type: DataType, items: Vec<Value>) -> HofResult<Self> {
        if let Some((idx, bad)) = items
            .iter()
            .enumerate()
            .find(|(_, v)| !v.conforms_to(&element_type))
        {
            return Err(HofError::type_mismatch(format!(
                "sequence element {idx} has type {} but the sequence holds {element_type}",
                bad.data_type()
            )));
        }
        Ok(Self {
            element_type,
            items,
        })
    }

    /// Empty sequence of the given element type.
    pub fn empty(element_type: DataType) -> Self {
        Self {
            element_type,
            items: Vec::new(),
        }
    }

    /// Build a sequence from native Rust values.
    pub fn from_native<T: NativeType>(items: Vec<T>) -> Self {
        Self {
            element_type: T::data_type(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Caller guarantees every item already conforms to `element_type`.
    pub(crate) fn from_parts(element_type: DataType, items: Vec<Value>) -> Self {
        Self {
            element_type,
            items,
        }
    }

    /// Convert back into native Rust values.
    pub fn to_native<T: NativeType>(&self) -> HofResult<Vec<T>> {
        self.items
            .iter()
            .map(|v| {
                T::from_value(v).ok_or_else(|| {
                    HofError::type_mismatch(format!(
                        "expected {} element, found {}",
                        T::data_type(),
                        v.data_type()
                    ))
                })
            })
            .collect()
    }

    pub fn element_type(&self) -> &DataType {
        &self.element_type
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Rust types with a fixed [`DataType`] tag.
///
/// Lets ordinary closures and vectors cross into the runtime layer without hand-written
/// `Value` matching.
pub trait NativeType: Sized + Into<Value> {
    /// Tag for this type.
    fn data_type() -> DataType;

    /// Extract from a value of the matching tag.
    fn from_value(value: &Value) -> Option<Self>;
}

impl NativeType for i64 {
    fn data_type() -> DataType {
        DataType::Int64
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int64()
    }
}

impl NativeType for f64 {
    fn data_type() -> DataType {
        DataType::Float64
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float64()
    }
}

impl NativeType for bool {
    fn data_type() -> DataType {
        DataType::Bool
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl NativeType for String {
    fn data_type() -> DataType {
        DataType::Utf8
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_utf8().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::{DataType, Sequence, Value};

    #[test]
    fn data_type_display_nests() {
        let t = DataType::function(
            vec![
                DataType::function(vec![DataType::Int64], DataType::Utf8),
                DataType::sequence_of(DataType::Int64),
            ],
            DataType::sequence_of(DataType::Utf8),
        );
        assert_eq!(t.to_string(), "fn(fn(int64) -> utf8, [int64]) -> [utf8]");
    }

    #[test]
    fn zero_values_match_their_type() {
        assert_eq!(DataType::Int64.zero_value(), Some(Value::Int64(0)));
        assert_eq!(DataType::Utf8.zero_value(), Some(Value::Utf8(String::new())));
        assert_eq!(
            DataType::sequence_of(DataType::Bool).zero_value(),
            Some(Value::Sequence(Sequence::empty(DataType::Bool)))
        );
        assert_eq!(DataType::function(vec![], DataType::Int64).zero_value(), None);
    }

    #[test]
    fn sequence_rejects_mixed_elements() {
        let err = Sequence::new(
            DataType::Int64,
            vec![Value::Int64(1), Value::Utf8("x".to_string())],
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("type mismatch"));
        assert!(msg.contains("element 1"));
    }

    #[test]
    fn empty_sequence_keeps_its_element_type() {
        let seq = Sequence::from_native(Vec::<String>::new());
        assert!(seq.is_empty());
        assert_eq!(
            Value::Sequence(seq).data_type(),
            DataType::sequence_of(DataType::Utf8)
        );
    }

    #[test]
    fn native_round_trip_and_wrong_tag() {
        let seq = Sequence::from_native(vec![1i64, 2, 3]);
        assert_eq!(seq.to_native::<i64>().unwrap(), vec![1, 2, 3]);
        assert!(seq.to_native::<bool>().is_err());
    }

    #[test]
    fn nested_sequence_conformance_checks_inner_type() {
        let inner = Value::Sequence(Sequence::from_native(vec![1i64]));
        assert!(inner.conforms_to(&DataType::sequence_of(DataType::Int64)));
        assert!(!inner.conforms_to(&DataType::sequence_of(DataType::Float64)));
    }
}
