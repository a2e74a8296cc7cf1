use std::path::PathBuf;

pub const DATA_DIR: &str = "data";
pub const OUTPUT_FILE: &str = "static/db.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}
