//! Reduce synthesis.
//!
//! Two shapes are accepted:
//!
//! - `fn(fn(A, A) -> A, [A]) -> A`: the first element seeds the fold.
//! - `fn(fn(A, T) -> A, [T], A) -> A`: the third argument seeds the fold.
//!
//! The fold is strictly left to right.

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::{DataType, Value};

use super::{expect_arity, function_arg, function_param, sequence_arg, sequence_param, OperationKind};

/// What a seedless reduce returns for an empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyReducePolicy {
    /// Fail with [`HofError::EmptyReduce`] (default).
    #[default]
    Error,
    /// Return the accumulator type's zero value.
    ///
    /// Function-typed accumulators have no zero value and still fail.
    ZeroValue,
}

/// Types of a bound reduce shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceShape {
    /// `A`, the accumulator and result type.
    pub accumulator: DataType,
    /// `T`, the sequence element type.
    pub element: DataType,
    /// Whether the shape takes an explicit seed.
    pub seeded: bool,
}

/// Check that `signature` is a valid reduce shape.
pub fn bind(signature: &Signature) -> HofResult<ReduceShape> {
    let kind = OperationKind::Reduce;
    expect_arity(signature, kind, &[2, 3])?;
    let combiner = function_param(signature, 0, kind)?;
    let element = sequence_param(signature, 1, kind)?;
    let accumulator = &signature.returns;

    if combiner.arity() != 2 {
        return Err(HofError::shape(format!(
            "reduce combiner must take exactly two arguments, '{combiner}' takes {}",
            combiner.arity()
        )));
    }
    if &combiner.params[0] != accumulator {
        return Err(HofError::shape(format!(
            "reduce combiner's first parameter must be the accumulator type {accumulator}, found {}",
            combiner.params[0]
        )));
    }
    if &combiner.params[1] != element {
        return Err(HofError::shape(format!(
            "reduce combiner's second parameter must be the element type {element}, found {}",
            combiner.params[1]
        )));
    }
    if &combiner.returns != accumulator {
        return Err(HofError::shape(format!(
            "reduce combiner must return the accumulator type {accumulator}, found {}",
            combiner.returns
        )));
    }

    let seeded = signature.arity() == 3;
    if seeded {
        if &signature.params[2] != accumulator {
            return Err(HofError::shape(format!(
                "reduce seed must be the accumulator type {accumulator}, found {}",
                signature.params[2]
            )));
        }
    } else if accumulator != element {
        return Err(HofError::shape(format!(
            "reduce without a seed needs matching accumulator and element types, found {accumulator} and {element}"
        )));
    }

    Ok(ReduceShape {
        accumulator: accumulator.clone(),
        element: element.clone(),
        seeded,
    })
}

/// Build the reduce callable for a bound shape.
pub fn install(signature: Signature, shape: ReduceShape, empty: EmptyReducePolicy) -> Callable {
    Callable::new(signature, move |args| {
        let combiner = function_arg(args, 0)?;
        let input = sequence_arg(args, 1)?;

        let (mut acc, rest) = if shape.seeded {
            let seed = args
                .get(2)
                .cloned()
                .ok_or_else(|| HofError::type_mismatch("reduce seed is missing"))?;
            (seed, input.as_slice())
        } else {
            match input.as_slice().split_first() {
                Some((first, rest)) => (first.clone(), rest),
                None => return empty_result(&shape.accumulator, empty),
            }
        };

        for item in rest {
            acc = combiner.call(&[acc, item.clone()])?;
        }
        Ok(acc)
    })
}

fn empty_result(accumulator: &DataType, policy: EmptyReducePolicy) -> HofResult<Value> {
    match policy {
        EmptyReducePolicy::Error => Err(HofError::EmptyReduce),
        EmptyReducePolicy::ZeroValue => accumulator.zero_value().ok_or(HofError::EmptyReduce),
    }
}
