use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES: [&str; 4] = ["zips.csv", "plans.csv", "slcsp.csv", "expected.csv"];

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");

        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
        for name in FIXTURES {
            fs::copy(fixtures.join(name), work.join(name)).expect("copy fixture");
        }

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("slcsp").expect("slcsp binary");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }

    /// Command with all three inputs pointed at the fixtures.
    pub fn run_cmd(&self, output: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "--zips",
            "zips.csv",
            "--plans",
            "plans.csv",
            "--slcsp",
            "slcsp.csv",
            "--output",
            output,
        ]);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.work.join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read work file")
    }

    pub fn write(&self, name: &str, body: &str) {
        fs::write(self.path(name), body).expect("write work file");
    }
}
