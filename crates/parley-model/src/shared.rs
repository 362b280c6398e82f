//! Lock-guarded handle for hosts that call the model from several threads.

use std::sync::{Arc, Mutex, MutexGuard};

use parley_core::{ModelError, ModelResult, Offer, OpponentModel};

use crate::engine::FrequencyModel;

/// One model behind one lock.
///
/// Every call (receive, evaluate, inspect) takes the same mutex, so the
/// rescale performed by scoring is never interleaved with an update.
pub struct SharedModel<M: OpponentModel = FrequencyModel> {
    inner: Arc<Mutex<M>>,
}

impl<M: OpponentModel> Clone for SharedModel<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: OpponentModel> SharedModel<M> {
    pub fn new(model: M) -> Self {
        Self {
            inner: Arc::new(Mutex::new(model)),
        }
    }

    pub fn receive_offer(&self, offer: &Offer) -> ModelResult<()> {
        self.lock()?.receive_offer(offer);
        Ok(())
    }

    pub fn evaluate(&self, candidate: &Offer) -> ModelResult<f64> {
        self.lock()?.evaluate(candidate)
    }

    /// Run `f` with exclusive access to the model.
    pub fn with<R>(&self, f: impl FnOnce(&mut M) -> R) -> ModelResult<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut *guard))
    }

    fn lock(&self) -> ModelResult<MutexGuard<'_, M>> {
        self.inner.lock().map_err(|_| ModelError::LockPoisoned)
    }
}
