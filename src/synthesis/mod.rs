//! Runtime synthesis of map/filter/reduce callables.
//!
//! Synthesis runs in two phases:
//!
//! 1. **bind**: the declared [`Signature`] is checked against the structural requirements of the
//!    operation ([`map::bind`], [`filter::bind`], [`reduce::bind`]). Every shape problem surfaces
//!    here as [`HofError::ShapeMismatch`], before any element is processed.
//! 2. **install**: a [`Callable`] running the operation's loop is built for the bound shape and
//!    placed into the caller's [`FnSlot`].
//!
//! Nothing is cached between calls; every synthesis produces an independent callable with no
//! mutable state of its own.
//!
//! ## Example
//!
//! ```rust
//! use rust_hof::callable::Callable;
//! use rust_hof::synthesis::{synthesize_map, FnSlot};
//! use rust_hof::types::{Sequence, Value};
//!
//! let mut mapper = FnSlot::parse("fn(fn(int64) -> int64, [int64]) -> [int64]").unwrap();
//! synthesize_map(&mut mapper).unwrap();
//!
//! let double = Callable::unary(|x: i64| x * 2);
//! let input = Sequence::from_native(vec![1i64, 2, 3, 4, 5]);
//! let out = mapper.call(&[double.into(), input.into()]).unwrap();
//!
//! let out = out.as_sequence().unwrap().to_native::<i64>().unwrap();
//! assert_eq!(out, vec![2, 4, 6, 8, 10]);
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::{DataType, Sequence, Value};

pub mod filter;
pub mod map;
pub mod observability;
pub mod reduce;
pub mod slot;

pub use filter::FilterShape;
pub use map::MapShape;
pub use observability::{CompositeObserver, StdErrObserver, SynthesisContext, SynthesisObserver};
pub use reduce::{EmptyReducePolicy, ReduceShape};
pub use slot::FnSlot;

/// The operations the synthesizer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// `fn(fn(T) -> U, [T]) -> [U]`
    Map,
    /// `fn(fn(T) -> bool, [T]) -> [T]`
    Filter,
    /// `fn(fn(A, A) -> A, [A]) -> A` or `fn(fn(A, T) -> A, [T], A) -> A`
    Reduce,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Reduce => "reduce",
        })
    }
}

/// Options controlling synthesis.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SynthesisOptions {
    /// What a seedless reduce does with an empty sequence.
    pub empty_reduce: EmptyReducePolicy,
    /// Optional observer notified of every bind outcome.
    pub observer: Option<Arc<dyn SynthesisObserver>>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            empty_reduce: EmptyReducePolicy::default(),
            observer: None,
        }
    }
}

impl fmt::Debug for SynthesisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SynthesisOptions")
            .field("empty_reduce", &self.empty_reduce)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Bind `signature` for `kind` and return the installed callable without going through a slot.
pub fn synthesize_callable(
    kind: OperationKind,
    signature: &Signature,
    options: &SynthesisOptions,
) -> HofResult<Callable> {
    let result = match kind {
        OperationKind::Map => map::bind(signature).map(|shape| map::install(signature.clone(), shape)),
        OperationKind::Filter => {
            filter::bind(signature).map(|shape| filter::install(signature.clone(), shape))
        }
        OperationKind::Reduce => reduce::bind(signature)
            .map(|shape| reduce::install(signature.clone(), shape, options.empty_reduce)),
    };

    if let Some(observer) = &options.observer {
        let ctx = SynthesisContext {
            kind,
            signature: signature.clone(),
        };
        match &result {
            Ok(_) => observer.on_installed(&ctx),
            Err(e) => observer.on_rejected(&ctx, e),
        }
    }

    result
}

/// Synthesize `kind` for the slot's declared signature and install it.
///
/// On a shape mismatch the slot is left exactly as it was.
pub fn synthesize(kind: OperationKind, slot: &mut FnSlot, options: &SynthesisOptions) -> HofResult<()> {
    let callable = synthesize_callable(kind, slot.signature(), options)?;
    slot.install(callable);
    Ok(())
}

/// Install a map implementation into `slot` using default options.
pub fn synthesize_map(slot: &mut FnSlot) -> HofResult<()> {
    synthesize(OperationKind::Map, slot, &SynthesisOptions::default())
}

/// Install a filter implementation into `slot` using default options.
pub fn synthesize_filter(slot: &mut FnSlot) -> HofResult<()> {
    synthesize(OperationKind::Filter, slot, &SynthesisOptions::default())
}

/// Install a reduce implementation into `slot` using default options.
///
/// Both the two-parameter (no seed) and three-parameter (seeded) shapes are accepted.
pub fn synthesize_reduce(slot: &mut FnSlot) -> HofResult<()> {
    synthesize(OperationKind::Reduce, slot, &SynthesisOptions::default())
}

// Bind-phase helpers shared by the operation modules.

fn expect_arity(signature: &Signature, kind: OperationKind, allowed: &[usize]) -> HofResult<()> {
    if allowed.contains(&signature.arity()) {
        return Ok(());
    }
    let allowed = allowed
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" or ");
    Err(HofError::shape(format!(
        "{kind} takes {allowed} parameters, '{signature}' has {}",
        signature.arity()
    )))
}

fn function_param(signature: &Signature, idx: usize, kind: OperationKind) -> HofResult<&Signature> {
    signature.params[idx].signature().ok_or_else(|| {
        HofError::shape(format!(
            "{kind} parameter {idx} must be a function, found {}",
            signature.params[idx]
        ))
    })
}

fn sequence_param(signature: &Signature, idx: usize, kind: OperationKind) -> HofResult<&DataType> {
    signature.params[idx].element_type().ok_or_else(|| {
        HofError::shape(format!(
            "{kind} parameter {idx} must be a sequence, found {}",
            signature.params[idx]
        ))
    })
}

// Install-phase helpers. Arguments have already been checked by `Callable::call`, so these only
// fail if a body is invoked directly with malformed input.

fn function_arg(args: &[Value], idx: usize) -> HofResult<&Callable> {
    args.get(idx)
        .and_then(Value::as_function)
        .ok_or_else(|| HofError::type_mismatch(format!("argument {idx} must be a function")))
}

fn sequence_arg(args: &[Value], idx: usize) -> HofResult<&Sequence> {
    args.get(idx)
        .and_then(Value::as_sequence)
        .ok_or_else(|| HofError::type_mismatch(format!("argument {idx} must be a sequence")))
}
