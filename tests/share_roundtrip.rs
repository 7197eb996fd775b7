use image::{GrayImage, ImageFormat, Luma};
use simple_vc::common::config::VcConfig;
use simple_vc::generator::{create_key_and_cipher, load_share, ShareGenerator};
use simple_vc::processing::cipher::invert;
use simple_vc::processing::{overlay, reveal, PadSize, FILLED};
use simple_vc::VcError;
use tempfile::tempdir;

fn checkerboard(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        Luma([if (x / 2 + y) % 2 == 0 { 0xFF } else { 0x00 }])
    })
}

#[test]
fn test_files_roundtrip_through_overlay() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.png");
    let key_path = dir.path().join("key.png");
    let cipher_path = dir.path().join("cipher.png");

    let source = checkerboard(6, 5);
    source.save(&input).unwrap();

    let pad = PadSize::default();
    let report = create_key_and_cipher(&input, ImageFormat::Png, &key_path, &cipher_path, pad).unwrap();

    assert_eq!((report.share_width, report.share_height), (18, 15));
    assert_eq!(report.total_blocks, 30);
    assert_eq!(report.key_filled_pixels, 30 * 4);

    let key = load_share(&key_path).unwrap();
    let cipher = load_share(&cipher_path).unwrap();
    assert_eq!(key.dimensions(), (18, 15));
    assert_eq!(cipher.dimensions(), (18, 15));

    for (x, y, c) in cipher.enumerate_pixels() {
        let k = *key.get_pixel(x, y);
        if source.get_pixel(x / 3, y / 3)[0] > 0 {
            assert_eq!(*c, invert(k));
        } else {
            assert_eq!(*c, k);
        }
    }

    let revealed = reveal(&overlay(&key, &cipher).unwrap(), pad).unwrap();
    assert_eq!(revealed, source);
}

#[test]
fn test_each_share_alone_is_half_filled() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.png");
    let key_path = dir.path().join("key.png");
    let cipher_path = dir.path().join("cipher.png");

    checkerboard(4, 4).save(&input).unwrap();

    let mut config = VcConfig::default();
    config.pad.width = 2;
    config.pad.height = 2;
    config.random.seed = Some(123);
    ShareGenerator::new(&config)
        .unwrap()
        .split(&input, &key_path, &cipher_path)
        .unwrap();

    for share in [load_share(&key_path).unwrap(), load_share(&cipher_path).unwrap()] {
        for by in 0..4 {
            for bx in 0..4 {
                let filled = (0..2)
                    .flat_map(|dx| (0..2).map(move |dy| (bx * 2 + dx, by * 2 + dy)))
                    .filter(|&(x, y)| *share.get_pixel(x, y) == FILLED)
                    .count();
                assert_eq!(filled, 2, "block ({}, {})", bx, by);
            }
        }
    }
}

#[test]
fn test_seeded_split_is_reproducible() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.png");
    checkerboard(3, 3).save(&input).unwrap();

    let mut config = VcConfig::default();
    config.random.seed = Some(5);
    let generator = ShareGenerator::new(&config).unwrap();

    let (key_a, cipher_a) = (dir.path().join("key_a.png"), dir.path().join("cipher_a.png"));
    let (key_b, cipher_b) = (dir.path().join("key_b.png"), dir.path().join("cipher_b.png"));
    generator.split(&input, &key_a, &cipher_a).unwrap();
    generator.split(&input, &key_b, &cipher_b).unwrap();

    assert_eq!(load_share(&key_a).unwrap(), load_share(&key_b).unwrap());
    assert_eq!(load_share(&cipher_a).unwrap(), load_share(&cipher_b).unwrap());
}

#[test]
fn test_missing_input_is_decode_error() {
    let dir = tempdir().unwrap();
    let err = create_key_and_cipher(
        &dir.path().join("missing.png"),
        ImageFormat::Png,
        &dir.path().join("key.png"),
        &dir.path().join("cipher.png"),
        PadSize::default(),
    )
    .unwrap_err();

    assert!(matches!(err, VcError::Decode { .. }));
    assert!(!dir.path().join("key.png").exists());
}

#[test]
fn test_unwritable_output_is_encode_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("plain.png");
    checkerboard(2, 2).save(&input).unwrap();

    let err = create_key_and_cipher(
        &input,
        ImageFormat::Png,
        &dir.path().join("no_such_dir").join("key.png"),
        &dir.path().join("cipher.png"),
        PadSize::default(),
    )
    .unwrap_err();

    assert!(matches!(err, VcError::Encode { .. }));
}
