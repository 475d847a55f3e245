use anyhow::{Context, Result};
use filetime::FileTime;
use std::io::Write;
use std::path::Path;

/// Permission bits given to installed and restored scripts.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Copy a file keeping contents, permissions and modification time.
pub fn copy_verbatim(src: &Path, dst: &Path) -> Result<u64> {
    let metadata = std::fs::metadata(src)
        .with_context(|| format!("source not found: {}", src.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("not a regular file: {}", src.display());
    }
    let bytes = std::fs::copy(src, dst)
        .with_context(|| format!("copy failed: {} -> {}", src.display(), dst.display()))?;
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_mtime(dst, mtime)
        .with_context(|| format!("failed to set mtime on {}", dst.display()))?;
    Ok(bytes)
}

/// Write `src` to `dst` through a temporary file in `dst`'s directory.
///
/// `dst` is replaced in one rename and is already executable when it
/// appears.
pub fn install_executable(src: &Path, dst: &Path) -> Result<u64> {
    let dir = dst.parent().unwrap_or_else(|| Path::new("."));
    let contents =
        std::fs::read(src).with_context(|| format!("failed to read {}", src.display()))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(&contents)?;
    tmp.as_file().sync_all()?;
    set_executable(tmp.path())?;
    tmp.persist(dst)
        .with_context(|| format!("failed to write {}", dst.display()))?;
    Ok(contents.len() as u64)
}

#[cfg(unix)]
pub fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
        .with_context(|| format!("failed to chmod {}", path.display()))
}

#[cfg(not(unix))]
pub fn set_executable(_path: &Path) -> Result<()> {
    // No executable bit outside unix.
    Ok(())
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Byte-for-byte comparison of two files.
pub fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    let len_a = std::fs::metadata(a)?.len();
    let len_b = std::fs::metadata(b)?.len();
    if len_a != len_b {
        return Ok(false);
    }
    Ok(std::fs::read(a)? == std::fs::read(b)?)
}

/// Anything, even a dangling symlink, exists at `path`.
pub fn occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}
