use crate::errors::ModelResult;
use crate::models::ParameterSpec;
use crate::types::Offer;

/// Online estimate of the opponent's preferences.
///
/// Hosts feed every received offer through `receive_offer` in arrival order
/// and query `evaluate` for any candidate afterwards. Implementations are not
/// internally synchronized; callers serialize access.
pub trait OpponentModel: Send {
    /// Human-readable component name.
    fn name(&self) -> &'static str;

    /// Tunable parameters with their defaults.
    fn parameter_spec(&self) -> Vec<ParameterSpec>;

    /// Learn from one offer received from the opponent.
    fn receive_offer(&mut self, offer: &Offer);

    /// Estimated opponent utility of `candidate`. A relative ranking signal,
    /// not a normalized utility.
    fn evaluate(&mut self, candidate: &Offer) -> ModelResult<f64>;
}
