//! Constants used throughout cellar.
//!
//! Centralizes file names, environment variables, and permission bits.

/// Default cellar home directory relative to HOME (~/.cellar).
pub const HOME_DIR: &str = ".cellar";

/// Optional configuration file inside the cellar home.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory holding one metadata file per workspace, inside the cellar home.
pub const STORE_DIR: &str = "workspaces";

/// Extension of workspace metadata files.
pub const STORE_EXTENSION: &str = "toml";

/// Overrides the cellar home directory.
pub const ENV_HOME: &str = "CELLAR_HOME";

/// Overrides the workspace store directory.
pub const ENV_STORE_DIR: &str = "CELLAR_STORE_DIR";

/// Overrides the scrypt work factor used for new ciphertexts.
pub const ENV_WORK_FACTOR: &str = "CELLAR_WORK_FACTOR";

/// Supplies the workspace passphrase without prompting.
pub const ENV_PASSPHRASE: &str = "CELLAR_PASSPHRASE";

/// Log filter directive.
pub const ENV_LOG: &str = "CELLAR_LOG";

/// The only answer accepted by confirmation prompts.
pub const AFFIRMATIVE: &str = "yes";

/// Permission bits for directories created under the store.
pub const DIR_MODE: u32 = 0o700;

/// Permission bits for the metadata file.
pub const FILE_MODE: u32 = 0o600;

/// Mode recorded for files on platforms without Unix permissions.
pub const FALLBACK_MODE: u32 = 0o644;

/// Version of the metadata file format.
pub const FORMAT_VERSION: &str = "1";

/// Suffix of the temporary sibling written before an atomic rename.
pub const TEMP_SUFFIX: &str = ".cellar.tmp";
