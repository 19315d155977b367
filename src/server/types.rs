//! JSON wire types for the HTTP endpoint.
//!
//! Field names match the browser front-end: requests carry `sequence`,
//! `frameSize` and `algorithm`; responses carry `result` and `page_faults`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId, Result};
use crate::simulation::{self, Policy, Trace, TraceStats};

/// Body of `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub sequence: Vec<PageId>,
    #[serde(rename = "frameSize")]
    pub frame_size: i64,
    /// Missing names fall through to `Error::UnknownPolicy`.
    #[serde(default)]
    pub algorithm: String,
}

impl SimulationRequest {
    /// Load a request from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Validate and run the simulation.
    ///
    /// # Errors
    /// - `Error::SequenceTooLong` if the sequence exceeds `max_sequence_len`
    /// - `Error::UnknownPolicy` / `Error::InvalidCapacity` from validation
    pub fn run(&self, max_sequence_len: usize) -> Result<SimulationResponse> {
        check_sequence_len(&self.sequence, max_sequence_len)?;
        let trace = simulation::simulate_named(&self.algorithm, &self.sequence, self.frame_size)?;
        Ok(trace.into())
    }
}

/// Successful response of `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Resident set after each access.
    pub result: Vec<Vec<PageId>>,
    /// Fault flag for each access.
    pub page_faults: Vec<bool>,
}

impl From<Trace<PageId>> for SimulationResponse {
    fn from(trace: Trace<PageId>) -> Self {
        let (result, page_faults) = trace.into_parts();
        Self {
            result,
            page_faults,
        }
    }
}

/// Body of `POST /compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub sequence: Vec<PageId>,
    #[serde(rename = "frameSize")]
    pub frame_size: i64,
}

impl CompareRequest {
    pub fn run(&self, max_sequence_len: usize) -> Result<CompareResponse> {
        check_sequence_len(&self.sequence, max_sequence_len)?;
        let capacity = simulation::validate_capacity(self.frame_size)?;
        let results = simulation::compare(&self.sequence, capacity)
            .into_iter()
            .map(|(policy, stats)| PolicySummary::new(policy, &stats))
            .collect();
        Ok(CompareResponse { results })
    }
}

/// Fault counts for one policy in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicySummary {
    pub algorithm: Policy,
    pub faults: u64,
    pub hits: u64,
    pub evictions: u64,
    pub fault_rate: f64,
}

impl PolicySummary {
    fn new(policy: Policy, stats: &TraceStats) -> Self {
        Self {
            algorithm: policy,
            faults: stats.faults,
            hits: stats.hits,
            evictions: stats.evictions,
            fault_rate: stats.fault_rate(),
        }
    }
}

/// Successful response of `POST /compare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResponse {
    pub results: Vec<PolicySummary>,
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn check_sequence_len(sequence: &[PageId], max: usize) -> Result<()> {
    if sequence.len() > max {
        return Err(Error::SequenceTooLong {
            len: sequence.len(),
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn request(algorithm: &str, frame_size: i64) -> SimulationRequest {
        SimulationRequest {
            sequence: [1, 2, 3, 1, 2, 4].into_iter().map(PageId::from).collect(),
            frame_size,
            algorithm: algorithm.to_string(),
        }
    }

    #[test]
    fn test_request_wire_names() {
        let json = r#"{"sequence": [1, "b", 1], "frameSize": 2, "algorithm": "LRU"}"#;
        let req: SimulationRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.frame_size, 2);
        assert_eq!(req.algorithm, "LRU");
        assert_eq!(req.sequence[1], PageId::from("b"));
    }

    #[test]
    fn test_response_wire_names() {
        let resp = request("LRU", 3).run(100).unwrap();
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["result"][5], serde_json::json!([1, 2, 4]));
        assert_eq!(
            json["page_faults"],
            serde_json::json!([true, true, true, false, false, true])
        );
    }

    #[test]
    fn test_run_rejects_long_sequence() {
        match request("LRU", 3).run(5) {
            Err(Error::SequenceTooLong { len, max }) => {
                assert_eq!(len, 6);
                assert_eq!(max, 5);
            }
            other => panic!("Expected SequenceTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_run_propagates_validation_errors() {
        assert!(matches!(
            request("LFU", 3).run(100),
            Err(Error::UnknownPolicy(_))
        ));
        assert!(matches!(
            request("MRU", -2).run(100),
            Err(Error::InvalidCapacity(-2))
        ));
    }

    #[test]
    fn test_compare_request() {
        let req = CompareRequest {
            sequence: [1, 2, 3, 1, 2, 3].into_iter().map(PageId::from).collect(),
            frame_size: 2,
        };
        let resp = req.run(100).unwrap();

        assert_eq!(resp.results.len(), 4);
        assert_eq!(resp.results[2].algorithm, Policy::Fifo);
        assert_eq!(resp.results[2].faults, 6);
        assert_eq!(resp.results[3].algorithm, Policy::Optimal);
        assert_eq!(resp.results[3].faults, 4);
    }

    #[test]
    fn test_request_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sequence": [7, 0, 1], "frameSize": 3, "algorithm": "Optimal"}}"#
        )
        .unwrap();

        let req = SimulationRequest::from_path(file.path()).unwrap();
        assert_eq!(req.algorithm, "Optimal");
        assert_eq!(req.sequence.len(), 3);
    }

    #[test]
    fn test_request_from_path_bad_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        assert!(matches!(
            SimulationRequest::from_path(file.path()),
            Err(Error::Json(_))
        ));
    }
}
