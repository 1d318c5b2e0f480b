use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "prdgen.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PRDGEN_CONFIG";

/// `prdgen.toml` under `root`.
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}
