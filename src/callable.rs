//! Function values.
//!
//! A [`Callable`] pairs a [`Signature`] with a body. Both user-supplied transforms and
//! synthesized map/filter/reduce implementations are callables, so the same call-boundary
//! checks apply to each.

use std::fmt;
use std::sync::Arc;

use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::{NativeType, Value};

type Body = dyn Fn(&[Value]) -> HofResult<Value> + Send + Sync;

/// A typed function value.
///
/// Cloning is cheap and shares the body. Two callables are equal only if they share the same
/// body instance and signature.
#[derive(Clone)]
pub struct Callable {
    signature: Arc<Signature>,
    body: Arc<Body>,
}

impl Callable {
    /// Create a callable with an explicit signature.
    ///
    /// The body receives arguments that have already been checked against `signature`.
    pub fn new<F>(signature: Signature, body: F) -> Self
    where
        F: Fn(&[Value]) -> HofResult<Value> + Send + Sync + 'static,
    {
        Self {
            signature: Arc::new(signature),
            body: Arc::new(body),
        }
    }

    /// Adapt a one-argument Rust closure.
    ///
    /// ```rust
    /// use rust_hof::callable::Callable;
    /// use rust_hof::types::Value;
    ///
    /// let double = Callable::unary(|x: i64| x * 2);
    /// assert_eq!(double.call(&[Value::Int64(21)]).unwrap(), Value::Int64(42));
    /// ```
    pub fn unary<A, R, F>(f: F) -> Self
    where
        A: NativeType,
        R: NativeType,
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let signature = Signature::new(vec![A::data_type()], R::data_type());
        Self::new(signature, move |args| Ok(f(native_arg(args, 0)?).into()))
    }

    /// Adapt a two-argument Rust closure.
    pub fn binary<A, B, R, F>(f: F) -> Self
    where
        A: NativeType,
        B: NativeType,
        R: NativeType,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        let signature = Signature::new(vec![A::data_type(), B::data_type()], R::data_type());
        Self::new(signature, move |args| {
            Ok(f(native_arg(args, 0)?, native_arg(args, 1)?).into())
        })
    }

    /// The declared shape.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invoke with type checks on both sides of the body.
    ///
    /// Errors raised by the body are returned unchanged.
    pub fn call(&self, args: &[Value]) -> HofResult<Value> {
        if args.len() != self.signature.arity() {
            return Err(HofError::type_mismatch(format!(
                "{} expects {} argument(s), got {}",
                self.signature,
                self.signature.arity(),
                args.len()
            )));
        }
        for (idx, (arg, expected)) in args.iter().zip(&self.signature.params).enumerate() {
            if !arg.conforms_to(expected) {
                return Err(HofError::type_mismatch(format!(
                    "argument {idx} of {} must be {expected}, got {}",
                    self.signature,
                    arg.data_type()
                )));
            }
        }

        let out = (self.body)(args)?;
        if !out.conforms_to(&self.signature.returns) {
            return Err(HofError::type_mismatch(format!(
                "{} returned {}",
                self.signature,
                out.data_type()
            )));
        }
        Ok(out)
    }
}

fn native_arg<T: NativeType>(args: &[Value], idx: usize) -> HofResult<T> {
    args.get(idx).and_then(T::from_value).ok_or_else(|| {
        HofError::type_mismatch(format!("argument {idx} is not {}", T::data_type()))
    })
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body) && self.signature == other.signature
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("signature", &self.signature.to_string())
            .finish()
    }
}
