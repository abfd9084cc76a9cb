mod yaml_runner;

pub use yaml_runner::{
    ExpectedName, ManifestError, TestCase, TestResult, load_test_cases_from_path,
    load_test_cases_from_str, run_all, run_test,
};
