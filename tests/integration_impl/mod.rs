//! Utilities used by the tests in `tests/integration/`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert_cmd::prelude::*;

/// Generates a test that writes a script (and possibly files that it includes) to a temp
/// directory, then runs `decohack` on it.
///
/// The available test attributes come directly from the methods on [`SourceTest`].
macro_rules! source_test {
    (
        $(# $attr:tt)*
        $test_name:ident
        $(, $method:ident : $value:expr )*
        $(,)?
    ) => {
        #[test]
        $(# $attr)*
        fn $test_name() {
            let mut test = crate::integration_impl::SourceTest::new();
            $( test.$method($value); )*
            test.run();
        }
    };
}

/// Name of the root script inside the temp directory.
pub const MAIN_FILE: &str = "main.dh";

pub struct SourceTest {
    main: String,
    other_files: Vec<(&'static str, Vec<u8>)>,
    args: Vec<String>,
    is_success: Option<bool>,
    errors: Vec<&'static str>,
    warnings: Vec<&'static str>,
    check_patch: Option<Box<dyn FnOnce(&str)>>,
    check_expanded_source: Option<Box<dyn FnOnce(&str)>>,
    check_stderr: Option<Box<dyn FnOnce(&str)>>,
}

impl SourceTest {
    pub fn new() -> Self {
        SourceTest {
            main: String::new(),
            other_files: vec![],
            args: vec![],
            is_success: None,
            errors: vec![],
            warnings: vec![],
            check_patch: None,
            check_expanded_source: None,
            check_stderr: None,
        }
    }

    /// Text of the root script.  Leading indentation is stripped from every line.
    pub fn main(&mut self, text: &str) {
        self.main = dedent(text);
    }

    /// Another file in the same directory, with a path relative to the root script.
    pub fn file(&mut self, (path, text): (&'static str, &str)) {
        self.other_files.push((path, dedent(text).into_bytes()));
    }

    /// Like [`Self::file`], for files that aren't UTF-8.
    pub fn raw_file(&mut self, (path, bytes): (&'static str, &[u8])) {
        self.other_files.push((path, bytes.to_vec()));
    }

    pub fn args(&mut self, args: &[&str]) {
        self.args.extend(args.iter().map(|s| s.to_string()));
    }

    pub fn expect_success(&mut self, success: bool) {
        assert_ne!(self.is_success, Some(!success), "conflicting expectations (must succeed and fail)");
        self.is_success = Some(success);
    }

    pub fn expect_error(&mut self, message: &'static str) {
        self.expect_success(false);
        self.errors.push(message);
    }

    pub fn expect_warning(&mut self, message: &'static str) {
        self.warnings.push(message);
    }

    /// Inspect the patch, with line endings normalized to `\n`.
    pub fn check_patch(&mut self, func: impl FnOnce(&str) + 'static) {
        self.expect_success(true);
        self.check_patch = Some(Box::new(func));
    }

    pub fn check_expanded_source(&mut self, func: impl FnOnce(&str) + 'static) {
        self.expect_success(true);
        self.check_expanded_source = Some(Box::new(func));
    }

    pub fn check_stderr(&mut self, func: impl FnOnce(&str) + 'static) {
        self.check_stderr = Some(Box::new(func));
    }

    pub fn run(self) {
        let dir = TestDir::new();
        dir.write(MAIN_FILE, self.main.as_bytes());
        for (path, bytes) in &self.other_files {
            dir.write(path, bytes);
        }

        let patch_path = dir.path().join("out.deh");
        let expanded_path = dir.path().join("expanded.dh");
        let output = run_decohack(dir.path(), |cmd| {
            cmd.arg(MAIN_FILE)
                .arg("-o").arg(&patch_path)
                .arg("-s").arg(&expanded_path)
                .args(&self.args)
        });
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let should_succeed = self.is_success.unwrap_or(true);
        assert_eq!(output.status.success(), should_succeed, "unexpected exit status. stderr:\n{}", stderr);
        for error in &self.errors {
            assert!(stderr.contains(&format!("error: {}", error)), "missing error {:?} in:\n{}", error, stderr);
        }
        for warning in &self.warnings {
            assert!(stderr.contains(&format!("warning: {}", warning)), "missing warning {:?} in:\n{}", warning, stderr);
        }
        assert!(!stderr.contains("panicked at"), "INTERNAL COMPILER ERROR:\n{}", stderr);

        if !should_succeed {
            assert!(!patch_path.exists(), "a failed compile wrote a patch");
            assert!(!expanded_path.exists(), "a failed compile wrote its source");
        }
        if let Some(check) = self.check_patch {
            check(&read_to_string(&patch_path).replace("\r\n", "\n"));
        }
        if let Some(check) = self.check_expanded_source {
            check(&read_to_string(&expanded_path));
        }
        if let Some(check) = self.check_stderr {
            check(&stderr);
        }
    }
}

/// Run the binary in a directory, with colors disabled.
pub fn run_decohack(dir: &Path, add_args: impl FnOnce(&mut Command) -> &mut Command) -> Output {
    let mut cmd = Command::cargo_bin("decohack").expect("decohack binary is built");
    cmd.current_dir(dir).env("DECOHACK_COLOR", "never");
    add_args(&mut cmd);
    let output = cmd.output().expect("failed to execute process");
    if !output.stderr.is_empty() {
        eprintln!("== DECOHACK STDERR:");
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
    }
    output
}

/// A temp directory that is deleted on drop.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("while making tempdir: {}", e));
        TestDir { dir }
    }

    pub fn path(&self) -> &Path { self.dir.path() }

    pub fn write(&self, relative: &str, bytes: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("while creating {}: {}", parent.display(), e));
        }
        std::fs::write(&path, bytes).unwrap_or_else(|e| panic!("while writing {}: {}", path.display(), e));
        path
    }
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("while reading text from {}: {}", path.display(), e))
}

/// Strip the common indentation of a raw string literal written inside a test.
fn dedent(text: &str) -> String {
    let indent = text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let mut out = text.lines()
        .map(|line| line.get(indent..).unwrap_or("").trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    out = out.trim_start_matches('\n').to_string();
    out.push('\n');
    out
}
