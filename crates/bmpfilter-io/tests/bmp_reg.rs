//! BMP codec regression test
//!
//! Writes fixture images to a temporary directory, reads them back and
//! checks that malformed headers are rejected in validation order.

use bmpfilter_io::header::{PIXEL_DATA_OFFSET, row_stride};
use bmpfilter_io::{Bitmap, IoError, read_bmp, read_bmp_file, write_bmp_file};
use bmpfilter_test::{RegParams, encode_bmp, gradient_image};
use std::fs;

#[test]
fn bmp_file_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("bmp_file");
    let dir = tempfile::tempdir().expect("tempdir");

    // Widths 1..=5 cover every padding amount (3, 2, 1, 0, 3).
    for w in 1..=5u32 {
        let h = 3;
        let bitmap = Bitmap::from_image(gradient_image(w, h)).expect("from_image");
        let path = dir.path().join(format!("gradient_{}x{}.bmp", w, h));
        write_bmp_file(&bitmap, &path).expect("write_bmp_file");

        // --- Test 1: file size is headers plus padded rows ---
        let len = fs::metadata(&path).expect("metadata").len();
        let expected = PIXEL_DATA_OFFSET as usize + row_stride(w) * h as usize;
        rp.compare_values(expected as f64, len as f64, 0.0);

        // --- Test 2: headers and pixels survive the round trip ---
        let decoded = read_bmp_file(&path).expect("read_bmp_file");
        rp.check(
            decoded.file_header == bitmap.file_header,
            &format!("file header {}x{}", w, h),
        );
        rp.check(
            decoded.info_header == bitmap.info_header,
            &format!("info header {}x{}", w, h),
        );
        rp.compare_images(&bitmap.image, &decoded.image);
    }

    // --- Test 3: a missing file is an I/O error, not a format error ---
    let err = read_bmp_file(dir.path().join("missing.bmp")).unwrap_err();
    rp.check(
        matches!(&err, IoError::Io(e) if e.kind() == std::io::ErrorKind::NotFound),
        "missing file error kind",
    );
    rp.check(!err.is_format_error(), "missing file is a format error");

    assert!(rp.cleanup(), "bmp_file regression test failed");
}

#[test]
fn bmp_reject_reg() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rp = RegParams::new("bmp_reject");
    let valid = encode_bmp(&gradient_image(4, 2)).expect("encode_bmp");

    let patch = |offset: usize, bytes: &[u8]| {
        let mut data = valid.clone();
        data[offset..offset + bytes.len()].copy_from_slice(bytes);
        data
    };

    // --- Test 1: each header check has its own error ---
    let err = read_bmp(patch(0, b"PB").as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::NotBitmap(0x4250)), "type tag");

    let err = read_bmp(patch(10, &58u32.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::UnsupportedOffset(58)), "pixel offset");

    let err = read_bmp(patch(14, &108u32.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::UnsupportedHeaderSize(108)), "header size");

    let err = read_bmp(patch(28, &32u16.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::UnsupportedBitDepth(32)), "bit depth");

    let err = read_bmp(patch(30, &1u32.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::Compressed(1)), "compression");

    let err = read_bmp(patch(18, &(-4i32).to_le_bytes()).as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::InvalidData(_)), "negative width");

    // --- Test 2: the earliest failing check wins ---
    let mut data = patch(28, &8u16.to_le_bytes());
    data[30..34].copy_from_slice(&3u32.to_le_bytes());
    let err = read_bmp(data.as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::UnsupportedBitDepth(8)), "bit depth before compression");

    let mut data = patch(0, b"XX");
    data[14..18].copy_from_slice(&12u32.to_le_bytes());
    let err = read_bmp(data.as_slice()).unwrap_err();
    rp.check(matches!(err, IoError::NotBitmap(_)), "type tag before header size");

    // --- Test 3: every rejection is a format error ---
    let short = &valid[..valid.len() - 1];
    let err = read_bmp(short).unwrap_err();
    rp.check(err.is_format_error(), "truncated pixel data");
    let err = read_bmp(&valid[..20]).unwrap_err();
    rp.check(err.is_format_error(), "truncated header");

    // A width far beyond the data must not be trusted for allocation.
    let err = read_bmp(patch(18, &i32::MAX.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(err.is_format_error(), "width larger than the file");
    let err = read_bmp(patch(22, &i32::MAX.to_le_bytes()).as_slice()).unwrap_err();
    rp.check(err.is_format_error(), "height larger than the file");

    // --- Test 4: a top-down bitmap keeps its rows in file order ---
    let mut data = valid.clone();
    data[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    let top_down = read_bmp(data.as_slice()).expect("top-down bitmap");
    let bottom_up = read_bmp(valid.as_slice()).expect("bottom-up bitmap");
    rp.check(top_down.info_header.is_top_down(), "top-down flag");
    rp.compare_images(&bottom_up.image, &top_down.image);

    assert!(rp.cleanup(), "bmp_reject regression test failed");
}
