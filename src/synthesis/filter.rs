//! Filter synthesis: `fn(fn(T) -> bool, [T]) -> [T]`.

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::{DataType, Sequence, Value};

use super::{expect_arity, function_arg, function_param, sequence_arg, sequence_param, OperationKind};

/// Element type of a bound filter shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterShape {
    /// `T`, shared by input and output.
    pub element: DataType,
}

/// Check that `signature` is a valid filter shape.
pub fn bind(signature: &Signature) -> HofResult<FilterShape> {
    let kind = OperationKind::Filter;
    expect_arity(signature, kind, &[2])?;
    let predicate = function_param(signature, 0, kind)?;
    let element = sequence_param(signature, 1, kind)?;

    if predicate.arity() != 1 {
        return Err(HofError::shape(format!(
            "filter predicate must take exactly one argument, '{predicate}' takes {}",
            predicate.arity()
        )));
    }
    if predicate.returns != DataType::Bool {
        return Err(HofError::shape(format!(
            "filter predicate must return bool, found {}",
            predicate.returns
        )));
    }
    if &predicate.params[0] != element {
        return Err(HofError::shape(format!(
            "filter predicate accepts {} but the sequence holds {element}",
            predicate.params[0]
        )));
    }
    if signature.returns.element_type() != Some(element) {
        return Err(HofError::shape(format!(
            "filter must return [{element}], found {}",
            signature.returns
        )));
    }

    Ok(FilterShape {
        element: element.clone(),
    })
}

/// Build the filter callable for a bound shape.
pub fn install(signature: Signature, shape: FilterShape) -> Callable {
    Callable::new(signature, move |args| {
        let predicate = function_arg(args, 0)?;
        let input = sequence_arg(args, 1)?;

        let mut out = Vec::new();
        for item in input {
            let keep = predicate.call(std::slice::from_ref(item))?;
            if keep.as_bool().ok_or_else(|| {
                HofError::type_mismatch(format!("predicate returned {}", keep.data_type()))
            })? {
                out.push(item.clone());
            }
        }
        Ok(Value::Sequence(Sequence::from_parts(shape.element.clone(), out)))
    })
}
