//! Caller-owned placeholders that synthesized callables are installed into.

use crate::callable::Callable;
use crate::error::{HofError, HofResult};
use crate::signature::Signature;
use crate::types::Value;

/// A declared function shape that may or may not have an implementation yet.
///
/// ```rust
/// use rust_hof::synthesis::{synthesize_filter, FnSlot};
///
/// let mut slot = FnSlot::parse("fn(fn(int64) -> bool, [int64]) -> [int64]").unwrap();
/// assert!(!slot.is_installed());
/// synthesize_filter(&mut slot).unwrap();
/// assert!(slot.is_installed());
/// ```
#[derive(Debug, Clone)]
pub struct FnSlot {
    signature: Signature,
    installed: Option<Callable>,
}

impl FnSlot {
    /// Create an empty slot for `signature`.
    pub fn new(signature: Signature) -> Self {
        Self {
            signature,
            installed: None,
        }
    }

    /// Create an empty slot from a textual signature.
    pub fn parse(text: &str) -> HofResult<Self> {
        Ok(Self::new(text.parse()?))
    }

    /// The declared shape.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn is_installed(&self) -> bool {
        self.installed.is_some()
    }

    /// The installed callable, if any.
    pub fn callable(&self) -> Option<&Callable> {
        self.installed.as_ref()
    }

    pub fn into_callable(self) -> Option<Callable> {
        self.installed
    }

    /// Invoke the installed callable.
    ///
    /// Returns [`HofError::SlotEmpty`] if nothing has been installed.
    pub fn call(&self, args: &[Value]) -> HofResult<Value> {
        match &self.installed {
            Some(callable) => callable.call(args),
            None => Err(HofError::SlotEmpty {
                signature: self.signature.to_string(),
            }),
        }
    }

    pub(crate) fn install(&mut self, callable: Callable) {
        self.installed = Some(callable);
    }
}
