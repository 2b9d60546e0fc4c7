//! The backend seam shared by both execution strategies.

use alsvid_ir::CircuitDescription;

use crate::result::ExperimentResult;

/// A symbolic execution backend.
///
/// Backends are stateless values: every run builds its working state
/// locally and returns it, so one instance can serve any number of
/// independent runs. Execution is synchronous and single-shot — symbolic
/// results are deterministic, so there is no job lifecycle to manage here;
/// queueing and polling belong to the provider layer.
///
/// Errors never escape as `Err`: a failed circuit surfaces as its own
/// ERROR result so that sibling circuits in a batch are unaffected.
pub trait Backend {
    /// Identifier of this backend, used in diagnostics and error messages.
    fn name(&self) -> &str;

    /// Run a single circuit.
    ///
    /// A requested `shots` count other than 1 is coerced to 1 with an
    /// informational diagnostic, per circuit.
    fn run_circuit(&self, circuit: &CircuitDescription, shots: u32) -> ExperimentResult;

    /// Run a batch of circuits strictly in order.
    ///
    /// Each circuit is processed independently; a failure aborts only that
    /// circuit's run.
    fn run_batch(&self, circuits: &[CircuitDescription], shots: u32) -> Vec<ExperimentResult> {
        circuits
            .iter()
            .map(|circuit| self.run_circuit(circuit, shots))
            .collect()
    }
}
