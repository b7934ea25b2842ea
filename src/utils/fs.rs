use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::core::CompressedImage;
use crate::utils::error::CompressorResult;
use crate::utils::formats::DOWNLOAD_FILE_NAME;

/// Writes the compressed payload into `dir` under the fixed download name.
///
/// Creates `dir` if it does not exist. Returns the full path of the
/// written file (`<dir>/compressed-image.jpg`).
pub async fn write_download(
    dir: impl AsRef<Path>,
    compressed: &CompressedImage,
) -> CompressorResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).await?;

    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, &compressed.encoded_bytes).await?;

    debug!("Wrote {} bytes to {}", compressed.byte_size, path.display());
    Ok(path)
}
