pub mod error;
pub mod formats;
pub mod fs;

pub use error::{CompressorError, CompressorResult, DecodeError, EncodeError};
pub use formats::{SourceFormat, format_bytes, DOWNLOAD_FILE_NAME};
pub use fs::write_download;
