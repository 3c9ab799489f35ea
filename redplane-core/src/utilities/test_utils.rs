use path_absolutize::Absolutize;
use rand::Rng;
use std::{env, fs, path::PathBuf};

const FILE_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ123456789-__";

pub(crate) struct TestUtils {
    /// The base folder path for the test files.
    test_base_path: PathBuf,
    /// A vector of files that will be automatically cleared when the instance is dropped.
    auto_clear_files: Vec<String>,
}

impl TestUtils {
    pub fn new() -> Self {
        Self {
            test_base_path: env::temp_dir(),
            auto_clear_files: Vec::new(),
        }
    }

    /// Get a randomly named output file path with a given extension.
    ///
    /// # Arguments
    ///
    /// * `ext` - The extension of the output file.
    /// * `auto_clear` - Whether this file should be automatically cleared after the test has finished.
    ///
    /// `Note:` this path is normalized to avoid creating any issues
    /// with relative paths.
    ///
    pub fn get_out_file(&mut self, ext: &str, auto_clear: bool) -> String {
        let mut path = self.test_base_path.clone();
        path.push(format!(
            "redplane-{}.{ext}",
            TestUtils::generate_ascii_string(16)
        ));

        let path = path.absolutize().unwrap();
        let path = path.to_str().unwrap().to_string();

        if auto_clear {
            self.auto_clear_files.push(path.clone());
        }

        path
    }

    /// Generate a random ASCII string of a specified length.
    ///
    /// # Arguments
    ///
    /// * `len` - The length of the final string.
    ///
    pub fn generate_ascii_string(len: usize) -> String {
        let mut rng = rand::rng();
        let chars_len = FILE_CHARS.len();

        let mut str = String::with_capacity(len);
        for _ in 0..len {
            let index = rng.random_range(0..chars_len);
            let char = FILE_CHARS.chars().nth(index).unwrap();
            str.push(char);
        }

        str
    }
}

impl Drop for TestUtils {
    fn drop(&mut self) {
        for f in &self.auto_clear_files {
            let _ = fs::remove_file(f);
        }
    }
}
