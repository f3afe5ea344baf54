//! Filesystem helpers with owner-only permissions.
//!
//! Permission handling is Unix only; elsewhere the platform defaults apply.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::core::constants;

/// Create `dir` and any missing parents, restricted to the owner.
pub(super) fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(constants::DIR_MODE);
    }
    builder.create(dir)
}

/// Atomically replace `path` with `data`, readable by the owner only.
pub(super) fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    write_with_mode(path, data, constants::FILE_MODE)
}

/// Atomically replace `path` with `data` carrying permission bits `mode`.
///
/// The contents go to an owner-only temporary sibling, which is synced,
/// given `mode`, then renamed over `path`. The destination never exists
/// with wider permissions than `mode`, and a read-only destination is
/// replaced rather than opened for writing.
pub fn write_with_mode(path: &Path, data: &[u8], mode: u32) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(constants::TEMP_SUFFIX);
    let tmp_path = Path::new(&tmp_name);

    let result = (|| {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(constants::FILE_MODE);
        }

        let mut file = options.open(tmp_path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(constants::FILE_MODE))?;
        }
        file.write_all(data)?;
        file.sync_all()?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(mode))?;
        }
        #[cfg(not(unix))]
        let _ = mode;
        drop(file);
        fs::rename(tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    result
}

/// Permission bits recorded for a tracked file.
pub fn file_mode(metadata: &fs::Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o7777
    }
    #[cfg(not(unix))]
    {
        let _ = metadata;
        constants::FALLBACK_MODE
    }
}
