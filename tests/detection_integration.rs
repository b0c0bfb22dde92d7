//! End-to-end detection tests over the public API.

use std::collections::HashSet;
use std::fs::File;
use std::io::Write;

use thumbgate::{detect, detect_reader, MatcherRegistry, ThumbgateError};

fn accept(mimes: &[&str]) -> HashSet<String> {
    mimes.iter().map(|m| m.to_string()).collect()
}

#[test]
fn png_signature_classifies() {
    let registry = MatcherRegistry::with_builtins();
    let mut data = b"\x89\x50\x4E\x47\x0D\x0A\x1A\x0A".to_vec();
    data.extend_from_slice(b"IHDR and the rest of the file");
    let d = detect(&registry, &data, None).unwrap();
    assert_eq!(d.mime, "image/png");
    assert_eq!(d.ext, "png");
}

#[test]
fn masked_riff_webp_classifies() {
    let registry = MatcherRegistry::with_builtins();
    // RIFF, arbitrary size field, WEBP, VP8 chunk tag.
    let data = b"RIFF\x9A\x00\x00\x00WEBPVP8 more";
    let d = detect(&registry, data, None).unwrap();
    assert_eq!(d.mime, "image/webp");
    assert_eq!(d.ext, "webp");
}

#[test]
fn ebml_with_matroska_doctype_classifies_as_mkv() {
    let registry = MatcherRegistry::with_builtins();
    let mut data = b"\x1A\x45\xDF\xA3\xA3\x42\x86\x81".to_vec();
    data.extend_from_slice(b"\x01\x42\x82\x88matroska\x42\x87\x81");
    data.resize(512, 0);
    let d = detect(&registry, &data, None).unwrap();
    assert_eq!(d.mime, "video/x-matroska");
    assert_eq!(d.ext, "mkv");
}

#[test]
fn ftyp_box_with_mp4_brand_classifies() {
    let registry = MatcherRegistry::with_builtins();
    // Box size 24, "ftyp", major brand, minor version, then "mp42" at the
    // next aligned chunk.
    let mut data = 24u32.to_be_bytes().to_vec();
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(b"isom"); // major brand
    data.extend_from_slice(&[0, 0, 2, 0]); // minor version
    data.extend_from_slice(b"mp42");
    data.extend_from_slice(b"avc1");
    let d = detect(&registry, &data, None).unwrap();
    assert_eq!(d.mime, "video/mp4");
    assert_eq!(d.ext, "mp4");
}

#[test]
fn accept_set_rejection_reports_detected_type() {
    let registry = MatcherRegistry::with_builtins();
    let allowed = accept(&["image/png"]);
    let jpeg = b"\xFF\xD8\xFF\xE1Exif";
    match detect(&registry, jpeg, Some(&allowed)) {
        Err(ThumbgateError::UnsupportedMime(label)) => assert_eq!(label, "image/jpeg"),
        other => panic!("expected rejection with detected label, got {other:?}"),
    }
}

#[test]
fn random_bytes_report_octet_stream() {
    let registry = MatcherRegistry::with_builtins();
    let noise = [0x17u8, 0xC4, 0x5B, 0x02, 0x99, 0xE3, 0x71, 0x4D, 0x28, 0xB6];
    match detect(&registry, &noise, None) {
        Err(ThumbgateError::UnsupportedMime(label)) => {
            assert_eq!(label, "application/octet-stream")
        }
        other => panic!("expected octet-stream sentinel, got {other:?}"),
    }
}

#[test]
fn builtin_coverage_across_categories() {
    let registry = MatcherRegistry::with_builtins();
    let cases: &[(&[u8], &str, &str)] = &[
        (b"\xFF\xD8\xFF\xDB", "image/jpeg", "jpg"),
        (b"GIF89a...", "image/gif", "gif"),
        (b"GIF87a...", "image/gif", "gif"),
        (b"%PDF-1.7\n", "application/pdf", "pdf"),
        (b"BM\x36\x84\x03\x00", "image/bmp", "bmp"),
        (b"8BPS\x00\x01", "image/photoshop", "psd"),
        (b"II*\x00\x08\x00\x00\x00", "image/tiff", "tiff"),
        (b"MM\x00*\x00\x00\x00\x08", "image/tiff", "tiff"),
        (b"\x00\x00\x01\x00\x01\x00", "image/x-icon", "ico"),
        (b"ID3\x04\x00\x00", "audio/mpeg", "mp3"),
        (b"\xFF\xF1\x50\x80", "audio/aac", "aac"),
        (b"\xFF\xF9\x50\x80", "audio/aac", "aac"),
        (b"fLaC\x00\x00\x00\x22", "audio/x-flac", "flac"),
        (b"MThd\x00\x00\x00\x06\x00\x01", "audio/midi", "midi"),
        (b"RIFF\x24\x08\x00\x00WAVEfmt ", "audio/wave", "wav"),
        (b"RIFF\xAA\xBB\xCC\xDDAVI LIST", "video/avi", "avi"),
        (b"OggS\x00\x02\x00\x00", "application/ogg", "ogg"),
        (b"\x00\x00\x00\x14ftypqt  ", "video/quicktime", "mov"),
        (
            &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00],
            "video/x-ms-wmv",
            "wmv",
        ),
        (b"FLV\x01\x05", "video/x-flv", "flv"),
    ];
    for (data, mime, ext) in cases {
        let d = detect(&registry, data, None)
            .unwrap_or_else(|e| panic!("{mime} sample failed: {e}"));
        assert_eq!(&d.mime, mime);
        assert_eq!(&d.ext, ext);
    }
}

#[test]
fn jpeg_beats_later_registered_ambiguity() {
    // \xFF\xD8\xFF also satisfies a later-registered custom matcher; the
    // earlier built-in wins.
    use thumbgate::ExactSig;
    let mut registry = MatcherRegistry::with_builtins();
    registry.register(ExactSig::new(
        "application/x-shadow",
        "shadow",
        &b"\xFF\xD8\xFF"[..],
    ));
    let d = detect(&registry, b"\xFF\xD8\xFF\xE0", None).unwrap();
    assert_eq!(d.mime, "image/jpeg");
}

#[test]
fn detect_reader_from_file() {
    let registry = MatcherRegistry::with_builtins();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.gif");
    {
        let mut f = File::create(&path).unwrap();
        f.write_all(b"GIF89a").unwrap();
        f.write_all(&vec![0u8; 1000]).unwrap();
    }
    let mut f = File::open(&path).unwrap();
    let d = detect_reader(&registry, &mut f, None).unwrap();
    assert_eq!(d.mime, "image/gif");
    assert_eq!(d.ext, "gif");
}

#[test]
fn detect_reader_short_file() {
    // A file shorter than the sniffing window still classifies.
    let registry = MatcherRegistry::with_builtins();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tiny.pdf");
    std::fs::write(&path, b"%PDF-1.4").unwrap();
    let mut f = File::open(&path).unwrap();
    let d = detect_reader(&registry, &mut f, None).unwrap();
    assert_eq!(d.mime, "application/pdf");
}
