use std::fs;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};


pub use data::{
    cws, declared_length, fws, generate_random_data, inflate, repetitive_body, swf, zlib,
    HEADER_SIZE, SAMPLE_BODY,
};

/// Path to the binary built by cargo for this package.
const BINARY_PATH: &str = env!("CARGO_BIN_EXE_swf-zopfli");

/// Output from running a binary command
#[derive(Eq, PartialEq)]
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create fixture with multiple files
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if any fixture file
    /// cannot be written.
    pub fn with_files(names: &[&str], contents: &[&[u8]]) -> Self {
        let root_dir = tempfile::TempDir::new().unwrap();
        for (name, contents) in names.iter().zip(contents) {
            fs::write(root_dir.path().join(name), contents).unwrap();
        }

        Self { root_dir }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        Self::with_files(&[name], &[contents])
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Get output path (adds .zopfli suffix)
    pub fn output_path(&self, name: &str) -> String {
        format!("{}.zopfli", self.path(name))
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be read.
    pub fn read(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap()
    }

    /// Create a subdirectory in the fixture
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be created.
    pub fn create_dir(&self, name: &str) {
        fs::create_dir(self.root_dir.path().join(name)).unwrap();
    }

    /// Names of all entries in the fixture directory, sorted
    ///
    /// # Panics
    ///
    /// Panics if the directory cannot be listed.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that files have expected contents
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be read or if its contents don't match the
    /// expected bytes.
    pub fn assert_files(&self, names: &[&str], contents: &[&[u8]]) {
        for (name, expected_contents) in names.iter().zip(contents) {
            let path = self.root_dir.path().join(name);
            let actual_contents = fs::read(path).unwrap_or_default();
            assert!(actual_contents == *expected_contents);
        }
    }

    /// Assert that `name.zopfli` is a `CWS` file whose body inflates to `body`
    /// and whose header otherwise matches `source_header`.
    ///
    /// # Panics
    ///
    /// Panics if the output is missing or does not match.
    pub fn assert_recompressed(&self, name: &str, source_header: &[u8], body: &[u8]) {
        let output = self.read(&format!("{name}.zopfli"));
        assert_eq!(output[0], b'C');
        assert_eq!(output[1..HEADER_SIZE], source_header[1..HEADER_SIZE]);
        assert_eq!(inflate(&output[HEADER_SIZE..]), body);
    }

    pub fn root_dir_path(&self) -> &Path {
        self.root_dir.path()
    }

    /// Run the cargo-built binary with the specified arguments
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or if awaiting its output fails.
    pub async fn run_cargo(&self, args: &[&str]) -> Output {
        let raw_output = tokio::process::Command::new(PathBuf::from(BINARY_PATH))
            .args(args)
            .current_dir(self.root_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .unwrap();

        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
