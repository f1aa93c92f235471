use std::fmt;
use std::sync::Arc;

use crate::error::HofError;
use crate::signature::Signature;

use super::OperationKind;

/// Context about a synthesis attempt.
#[derive(Debug, Clone)]
pub struct SynthesisContext {
    /// Operation requested.
    pub kind: OperationKind,
    /// Shape that was bound.
    pub signature: Signature,
}

/// Observer interface for synthesis outcomes.
///
/// Called once per synthesis, never while elements are being processed.
pub trait SynthesisObserver: Send + Sync {
    /// Called when a shape binds and a callable is installed.
    fn on_installed(&self, _ctx: &SynthesisContext) {}

    /// Called when binding fails.
    fn on_rejected(&self, _ctx: &SynthesisContext, _error: &HofError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SynthesisObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn SynthesisObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SynthesisObserver for CompositeObserver {
    fn on_installed(&self, ctx: &SynthesisContext) {
        for o in &self.observers {
            o.on_installed(ctx);
        }
    }

    fn on_rejected(&self, ctx: &SynthesisContext, error: &HofError) {
        for o in &self.observers {
            o.on_rejected(ctx, error);
        }
    }
}

/// Logs synthesis events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl SynthesisObserver for StdErrObserver {
    fn on_installed(&self, ctx: &SynthesisContext) {
        eprintln!("[synth][ok] kind={} signature={}", ctx.kind, ctx.signature);
    }

    fn on_rejected(&self, ctx: &SynthesisContext, error: &HofError) {
        eprintln!(
            "[synth][rejected] kind={} signature={} err={}",
            ctx.kind, ctx.signature, error
        );
    }
}
