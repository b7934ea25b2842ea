//! Async driver behaviour: off-thread execution, stale-result discard,
//! last-write-wins, and the download path.

mod common;

use anyhow::Result;
use image_compressor::{
    utils, CompressionSession, Compressor, Quality, SessionState, DOWNLOAD_FILE_NAME,
};

use common::{init_tracing, photo_image, png_bytes};

#[tokio::test]
async fn load_and_compress_off_thread() -> Result<()> {
    init_tracing();
    let compressor = Compressor::new();
    let mut session = CompressionSession::new();

    // Decode happens once, off-thread; the session adopts the result.
    let source = compressor.load(png_bytes(&photo_image(96, 96))).await?;
    session.install(source);

    let ticket = session.begin_compress(Quality::default())?;
    let (ticket, result) = compressor.execute(ticket).await;
    assert!(session.commit(&ticket, result?));
    assert_eq!(session.state(), SessionState::Compressed);
    Ok(())
}

#[tokio::test]
async fn completion_for_replaced_source_is_discarded() -> Result<()> {
    let compressor = Compressor::new();
    let mut session = CompressionSession::new();

    session.load(png_bytes(&photo_image(64, 64)))?;
    let ticket = session.begin_compress(Quality::default())?;

    // User selects a new file while the encode is pending.
    session.load(png_bytes(&photo_image(32, 32)))?;

    let (ticket, result) = compressor.execute(ticket).await;
    assert!(!session.commit(&ticket, result?));
    assert!(session.compressed().is_none());
    assert_eq!(session.state(), SessionState::Loaded);
    Ok(())
}

#[tokio::test]
async fn latest_request_wins_regardless_of_completion_order() -> Result<()> {
    let compressor = Compressor::new();
    let mut session = CompressionSession::new();
    session.load(png_bytes(&photo_image(64, 64)))?;

    let first = session.begin_compress(Quality::new(20)?)?;
    let second = session.begin_compress(Quality::new(95)?)?;

    // Completions arrive out of order.
    let (second, second_result) = compressor.execute(second).await;
    let (first, first_result) = compressor.execute(first).await;

    assert!(session.commit(&second, second_result?));
    assert!(!session.commit(&first, first_result?));
    assert_eq!(session.compressed().unwrap().quality.get(), 95);
    Ok(())
}

#[tokio::test]
async fn async_decode_failure_is_a_decode_error() {
    let compressor = Compressor::new();
    let err = compressor.load(vec![0u8; 64]).await.unwrap_err();
    assert!(matches!(err, image_compressor::CompressorError::Decode(_)));
}

#[tokio::test]
async fn download_writes_fixed_file_name() -> Result<()> {
    let compressor = Compressor::new();
    let mut session = CompressionSession::new();
    session.load(png_bytes(&photo_image(48, 48)))?;

    let ticket = session.begin_compress(Quality::default())?;
    let (ticket, result) = compressor.execute(ticket).await;
    session.commit(&ticket, result?);

    // Temp directory scoped to this test run
    let run_id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("image-compressor-test-{run_id}"));

    let compressed = session.compressed().unwrap();
    let path = utils::write_download(&dir, compressed).await?;

    assert_eq!(path.file_name().unwrap(), DOWNLOAD_FILE_NAME);
    let on_disk = tokio::fs::read(&path).await?;
    assert_eq!(on_disk, compressed.encoded_bytes);
    assert_eq!(on_disk.len() as u64, compressed.byte_size);

    // Clean up temp directory (best effort)
    let _ = tokio::fs::remove_dir_all(&dir).await;
    Ok(())
}
