//! The per-circuit result contract and the batch envelope shape.
//!
//! These are the only types exchanged with the provider/job layer. The
//! engine fills one [`ExperimentResult`] per circuit; assembling the
//! [`BatchResult`] envelope (job ids, timing) is the caller's business —
//! the shape is defined here so both sides agree on it.

use alsvid_exact::Scalar;
use serde::{Deserialize, Serialize};

/// Terminal status of one circuit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExperimentStatus {
    /// The circuit ran to completion.
    Done,
    /// The circuit was aborted by a structural error.
    Error,
}

/// Payload of a completed circuit run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultData {
    /// Final amplitudes, one per basis index, qubit 0 fastest-varying.
    Statevector(Vec<Scalar>),
    /// The circuit unitary, row-major.
    Unitary(Vec<Vec<Scalar>>),
}

/// Result of one circuit in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResult {
    /// Name of the circuit, echoed from its description.
    pub name: String,
    /// Terminal status.
    pub status: ExperimentStatus,
    /// Payload, present when status is DONE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResultData>,
    /// Error message, present when status is ERROR.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExperimentResult {
    /// Create a successful result.
    pub fn done(name: impl Into<String>, data: ResultData) -> Self {
        Self {
            name: name.into(),
            status: ExperimentStatus::Done,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result.
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ExperimentStatus::Error,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Check if the circuit completed.
    pub fn is_success(&self) -> bool {
        self.status == ExperimentStatus::Done
    }

    /// Get the statevector payload, if any.
    pub fn statevector(&self) -> Option<&[Scalar]> {
        match &self.data {
            Some(ResultData::Statevector(v)) => Some(v),
            _ => None,
        }
    }

    /// Get the unitary payload, if any.
    pub fn unitary(&self) -> Option<&[Vec<Scalar>]> {
        match &self.data {
            Some(ResultData::Unitary(m)) => Some(m),
            _ => None,
        }
    }
}

/// The batch envelope exchanged with the provider layer.
///
/// Assembled outside the engine; defined here for the shape only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Identifier of the backend that produced the results.
    pub backend_name: String,
    /// Caller-assigned batch id.
    pub id: String,
    /// Caller-assigned job id.
    pub job_id: String,
    /// Per-circuit results, in submission order.
    pub results: Vec<ExperimentResult>,
    /// Aggregate status.
    pub status: String,
    /// Whether every circuit completed.
    pub success: bool,
    /// Wall-clock seconds, measured by the caller.
    pub time_taken: f64,
}

impl BatchResult {
    /// Assemble the envelope around a batch of per-circuit results.
    pub fn new(
        backend_name: impl Into<String>,
        id: impl Into<String>,
        job_id: impl Into<String>,
        results: Vec<ExperimentResult>,
        time_taken: f64,
    ) -> Self {
        let success = results.iter().all(ExperimentResult::is_success);
        Self {
            backend_name: backend_name.into(),
            id: id.into(),
            job_id: job_id.into(),
            results,
            status: "COMPLETED".to_string(),
            success,
            time_taken,
        }
    }
}
