//! In-memory test images.

/// Build a minimal JPEG whose EXIF block holds `DateTimeOriginal = timestamp`.
///
/// `timestamp` must be the 19 byte EXIF form `YYYY:MM:DD HH:MM:SS`.
pub fn jpeg_with_capture_time(timestamp: &str) -> Vec<u8> {
    assert_eq!(timestamp.len(), 19, "EXIF timestamps are 19 bytes");

    // Little-endian TIFF: IFD0 at 8 with one ExifIFDPointer entry,
    // Exif IFD at 26 with one DateTimeOriginal entry, value at 44.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II\x2a\x00");
    tiff.extend_from_slice(&8u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x8769u16.to_le_bytes());
    tiff.extend_from_slice(&4u16.to_le_bytes());
    tiff.extend_from_slice(&1u32.to_le_bytes());
    tiff.extend_from_slice(&26u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(&1u16.to_le_bytes());
    tiff.extend_from_slice(&0x9003u16.to_le_bytes());
    tiff.extend_from_slice(&2u16.to_le_bytes());
    tiff.extend_from_slice(&20u32.to_le_bytes());
    tiff.extend_from_slice(&44u32.to_le_bytes());
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(timestamp.as_bytes());
    tiff.push(0);

    let mut app1 = b"Exif\x00\x00".to_vec();
    app1.extend_from_slice(&tiff);

    let mut jpeg = vec![0xff, 0xd8, 0xff, 0xe1];
    jpeg.extend_from_slice(&((app1.len() + 2) as u16).to_be_bytes());
    jpeg.extend_from_slice(&app1);
    jpeg.extend_from_slice(&[0xff, 0xd9]);
    jpeg
}
