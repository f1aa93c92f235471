//! Map synthesis: `fn(fn(T) -> U, [T]) -> [U]`.

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::{DataType, Sequence, Value};

use super::{expect_arity, function_arg, function_param, sequence_arg, sequence_param, OperationKind};

/// Element types of a bound map shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapShape {
    /// `T`, the input element type.
    pub input: DataType,
    /// `U`, the output element type.
    pub output: DataType,
}

/// Check that `signature` is a valid map shape.
pub fn bind(signature: &Signature) -> HofResult<MapShape> {
    let kind = OperationKind::Map;
    expect_arity(signature, kind, &[2])?;
    let transform = function_param(signature, 0, kind)?;
    let input = sequence_param(signature, 1, kind)?;

    if transform.arity() != 1 {
        return Err(HofError::shape(format!(
            "map transform must take exactly one argument, '{transform}' takes {}",
            transform.arity()
        )));
    }
    if &transform.params[0] != input {
        return Err(HofError::shape(format!(
            "map transform accepts {} but the sequence holds {input}",
            transform.params[0]
        )));
    }

    let output = signature.returns.element_type().ok_or_else(|| {
        HofError::shape(format!("map must return a sequence, found {}", signature.returns))
    })?;
    if output != &transform.returns {
        return Err(HofError::shape(format!(
            "map returns [{output}] but the transform produces {}",
            transform.returns
        )));
    }

    Ok(MapShape {
        input: input.clone(),
        output: output.clone(),
    })
}

/// Build the map callable for a bound shape.
pub fn install(signature: Signature, shape: MapShape) -> Callable {
    Callable::new(signature, move |args| {
        let transform = function_arg(args, 0)?;
        let input = sequence_arg(args, 1)?;

        let mut out = Vec::with_capacity(input.len());
        for item in input {
            out.push(transform.call(std::slice::from_ref(item))?);
        }
        Ok(Value::Sequence(Sequence::from_parts(shape.output.clone(), out)))
    })
}

#[cfg(test)]
mod tests {
    use super::{bind, MapShape};
    use crate::error::HofError;
    use crate::types::DataType;

    fn bind_str(text: &str) -> Result<MapShape, HofError> {
        bind(&text.parse().unwrap())
    }

    #[test]
    fn binds_type_changing_map() {
        let shape = bind_str("fn(fn(utf8) -> int64, [utf8]) -> [int64]").unwrap();
        assert_eq!(shape.input, DataType::Utf8);
        assert_eq!(shape.output, DataType::Int64);
    }

    #[test]
    fn binds_nested_sequences() {
        let shape = bind_str("fn(fn([int64]) -> int64, [[int64]]) -> [int64]").unwrap();
        assert_eq!(shape.input, DataType::sequence_of(DataType::Int64));
    }

    #[test]
    fn rejects_incompatible_transform_input() {
        let err = bind_str("fn(fn(utf8) -> int64, [int64]) -> [int64]").unwrap_err();
        assert!(err.to_string().contains("accepts utf8 but the sequence holds int64"));
    }

    #[test]
    fn rejects_non_sequence_output() {
        let err = bind_str("fn(fn(int64) -> int64, [int64]) -> int64").unwrap_err();
        assert!(err.to_string().contains("must return a sequence"));
    }

    #[test]
    fn rejects_output_not_matching_transform() {
        let err = bind_str("fn(fn(int64) -> int64, [int64]) -> [utf8]").unwrap_err();
        assert!(err.to_string().contains("transform produces int64"));
    }

    #[test]
    fn rejects_binary_transform() {
        let err = bind_str("fn(fn(int64, int64) -> int64, [int64]) -> [int64]").unwrap_err();
        assert!(err.to_string().contains("exactly one argument"));
    }

    #[test]
    fn rejects_non_function_first_parameter() {
        let err = bind_str("fn(int64, [int64]) -> [int64]").unwrap_err();
        assert!(err.to_string().contains("parameter 0 must be a function"));
    }
}
