//! Integration tests for Matcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn matcache() -> Command {
        cargo_bin_cmd!("matcache")
    }

    fn matrix_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{json}").unwrap();
        file
    }

    #[test]
    fn help_displays() {
        matcache()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Memoizing Matrix Inverse Cache"));
    }

    #[test]
    fn version_displays() {
        matcache()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("matcache"));
    }

    #[test]
    fn invert_prints_inverse() {
        let file = matrix_file("[[1, 3], [2, 4]]");

        matcache()
            .arg("invert")
            .arg(file.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("[[-2.0,1.5],[1.0,-0.5]]"));
    }

    #[test]
    fn invert_verify_reports_residual() {
        let file = matrix_file("[[1, 3], [2, 4]]");

        matcache()
            .args(["invert", "--verify"])
            .arg(file.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("max residual"));
    }

    #[test]
    fn invert_singular_fails() {
        let file = matrix_file("[[1, 2], [2, 4]]");

        matcache()
            .arg("invert")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("singular"));
    }

    #[test]
    fn invert_non_square_fails() {
        let file = matrix_file("[[1, 2, 3], [4, 5, 6]]");

        matcache()
            .arg("invert")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse matrix"));
    }

    #[test]
    fn invert_missing_file_fails() {
        matcache()
            .args(["invert", "/nonexistent/matrix.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn check_accepts_true_inverse() {
        let matrix = matrix_file("[[1, 3], [2, 4]]");
        let candidate = matrix_file("[[-2, 1.5], [1, -0.5]]");

        matcache()
            .arg("check")
            .arg(matrix.path())
            .arg(candidate.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("OK"));
    }

    #[test]
    fn check_rejects_non_inverse() {
        let matrix = matrix_file("[[1, 3], [2, 4]]");
        let candidate = matrix_file("[[1, 0], [0, 1]]");

        matcache()
            .arg("check")
            .arg(matrix.path())
            .arg(candidate.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("rejected"));
    }

    #[test]
    fn config_path() {
        matcache()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_prints_tolerance() {
        matcache()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tolerance"));
    }
}
