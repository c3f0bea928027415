use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write `output` to `path`, then mark it executable.
///
/// Permissions are only changed once the whole file is on disk, so a failed
/// write never leaves a runnable half-script behind.
pub fn save(output: &str, path: &Path) -> Result<()> {
    {
        let mut file = File::create(path)?;
        file.write_all(output.as_bytes())?;
        file.sync_all()?;
    }
    set_executable(path)?;
    log::debug!("wrote {} bytes to {}", output.len(), path.display());
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
