use std::path::Path;

/// Checks that a store file exists and is a regular file before it is mapped.
///
/// # Returns:
/// - `Ok(())` if `path` is a regular file.
/// - `Err(std::io::Error)` with `NotFound` or `InvalidInput` otherwise.
pub fn verify_file_existence(path: &Path) -> std::io::Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("'{}' is not a regular file.", path.display()),
        )),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Store file '{}' does not exist.", path.display()),
        )),
        Err(err) => Err(err),
    }
}
