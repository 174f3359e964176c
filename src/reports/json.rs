//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::CensusError;
use crate::harness::{ComparisonReport, CountReport, VerificationReport};

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator<ComparisonReport> for JsonReportGenerator {
    fn generate_report(&self, report: &ComparisonReport) -> Result<String, CensusError> {
        let output = json!({
            "plan": report.plan,
            "mismatch_count": report.mismatches().count(),
            "rows": report.rows,
        });

        serde_json::to_string_pretty(&output).map_err(CensusError::Json)
    }
}

impl ReportGenerator<VerificationReport> for JsonReportGenerator {
    fn generate_report(&self, report: &VerificationReport) -> Result<String, CensusError> {
        let output = json!({
            "plan": report.plan,
            "all_passed": report.all_passed(),
            "passed": report.passed,
            "failed": report.failures.len(),
            "failures": report.failures,
        });

        serde_json::to_string_pretty(&output).map_err(CensusError::Json)
    }
}

impl ReportGenerator<CountReport> for JsonReportGenerator {
    fn generate_report(&self, report: &CountReport) -> Result<String, CensusError> {
        serde_json::to_string_pretty(report).map_err(CensusError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::cycles::Cycle;
    use crate::graph::{EdgeSpec, Storage};
    use crate::harness::{ComparisonPlan, MethodTiming, TimingRow, VerificationPlan};

    #[test]
    fn test_comparison_json() {
        let report = ComparisonReport {
            plan: ComparisonPlan {
                sizes: vec![5],
                edges: EdgeSpec::Probability(0.4),
                seed: 9,
                permutation_limit: 12,
                enumerate_limit: None,
                storage: Some(Storage::Matrix),
            },
            rows: vec![TimingRow {
                vertices: 5,
                seed: 9,
                edges: Some(4),
                permutation: Some(MethodTiming {
                    seconds: 0.25,
                    cycles: 1,
                }),
                dfs_enumeration: None,
                dfs_existence: None,
                enumerations_agree: None,
                skipped: None,
            }],
        };

        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["plan"]["seed"], 9);
        assert_eq!(json["plan"]["edges"]["probability"], 0.4);
        assert_eq!(json["plan"]["storage"], "matrix");
        assert_eq!(json["mismatch_count"], 0);
        assert_eq!(json["rows"][0]["permutation"]["cycles"], 1);
        assert_eq!(json["rows"][0]["dfs_enumeration"], Value::Null);
    }

    #[test]
    fn test_verification_json() {
        let report = VerificationReport {
            plan: VerificationPlan {
                trials: 3,
                max_vertices: 5,
                probability: 0.5,
                seed: 1,
            },
            passed: 3,
            failures: vec![],
        };

        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["all_passed"], true);
        assert_eq!(json["passed"], 3);
        assert_eq!(json["failures"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_count_json_lists_cycles_as_vertex_arrays() {
        let report = CountReport {
            seed: 2,
            vertices: 3,
            edges: 3,
            storage: Storage::List,
            components: 1,
            is_forest: false,
            dfs_existence: MethodTiming {
                seconds: 0.0,
                cycles: 1,
            },
            dfs_enumeration: None,
            permutation: None,
            hamiltonian_cycles: Some(1),
            cycles: Some(vec![Cycle::new([2, 0, 1]).unwrap()]),
        };

        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["cycles"], json!([[0, 1, 2]]));
        assert_eq!(json["hamiltonian_cycles"], 1);
        assert_eq!(json["storage"], "list");
    }
}
