use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// 回転前に一旦ここまで縮めて処理コストを抑える
const PRE_ROTATE_MAX: u32 = 2000;
/// PDF に埋め込む直前のサイズ上限
const EMBED_MAX_W: u32 = 480;
const EMBED_MAX_H: u32 = 360;

/// EXIF Orientation（8 値）に従って画像を正立させる。
/// 1 または未指定は変更なし。
pub fn correct_orientation(image: DynamicImage, orientation: Option<u32>) -> DynamicImage {
    match orientation.unwrap_or(1) {
        // 水平反転
        2 => image.fliph(),
        // 180 度回転
        3 => image.rotate180(),
        // 垂直反転
        4 => image.flipv(),
        // 時計回り 90 度 + 水平反転
        5 => image.rotate90().fliph(),
        // 時計回り 90 度
        6 => image.rotate90(),
        // 反時計回り 90 度 + 水平反転
        7 => image.rotate270().fliph(),
        // 反時計回り 90 度
        8 => image.rotate270(),
        _ => image,
    }
}

/// コンテナ（JPEG 等）から Orientation タグを読む。無ければ None
pub fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let exif = exif::Reader::new().read_from_container(&mut Cursor::new(bytes)).ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?.value.get_uint(0)
}

/// PDF 埋め込み用に写真を整える：
/// 大きすぎる画像の事前縮小 → EXIF 正立 → 埋め込みサイズへの縮小
pub fn prepare_photo(bytes: &[u8]) -> anyhow::Result<DynamicImage> {
    let orientation = read_orientation(bytes);
    let mut image = image::load_from_memory(bytes)?;

    let (width, height) = image.dimensions();
    if width > PRE_ROTATE_MAX || height > PRE_ROTATE_MAX {
        image = image.resize(PRE_ROTATE_MAX, PRE_ROTATE_MAX, FilterType::Lanczos3);
    }

    let image = correct_orientation(image, orientation);

    let (width, height) = image.dimensions();
    if width > EMBED_MAX_W || height > EMBED_MAX_H {
        Ok(image.resize(EMBED_MAX_W, EMBED_MAX_H, FilterType::Lanczos3))
    } else {
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// 左が赤、右が青の 2x1 画像
    fn two_pixel_image() -> DynamicImage {
        let mut img = image::RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 0, 255]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn orientation_1_and_absent_leave_image_unchanged() {
        for orientation in [Some(1), None] {
            let img = correct_orientation(two_pixel_image(), orientation);
            assert_eq!(img.dimensions(), (2, 1));
            assert_eq!(img.get_pixel(0, 0), RED);
        }
    }

    #[test]
    fn orientation_2_flips_horizontally() {
        let img = correct_orientation(two_pixel_image(), Some(2));
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), BLUE);
        assert_eq!(img.get_pixel(1, 0), RED);
    }

    #[test]
    fn orientation_3_rotates_half_turn() {
        let img = correct_orientation(two_pixel_image(), Some(3));
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), BLUE);
    }

    #[test]
    fn orientation_6_rotates_quarter_turn_clockwise() {
        let img = correct_orientation(two_pixel_image(), Some(6));
        // 横長 2x1 が縦長 1x2 になり、左端の赤が上端へ来る
        assert_eq!(img.dimensions(), (1, 2));
        assert_eq!(img.get_pixel(0, 0), RED);
        assert_eq!(img.get_pixel(0, 1), BLUE);
    }

    #[test]
    fn orientation_8_rotates_quarter_turn_counter_clockwise() {
        let img = correct_orientation(two_pixel_image(), Some(8));
        assert_eq!(img.dimensions(), (1, 2));
        assert_eq!(img.get_pixel(0, 0), BLUE);
        assert_eq!(img.get_pixel(0, 1), RED);
    }

    #[test]
    fn orientation_5_transposes() {
        let img = correct_orientation(two_pixel_image(), Some(5));
        assert_eq!(img.dimensions(), (1, 2));
        // 回転後に左右反転しても 1 ピクセル幅では並びは同じ
        assert_eq!(img.get_pixel(0, 0), RED);
    }

    /// SOI + APP1(Exif, Orientation のみ) + EOI だけの最小 JPEG
    fn jpeg_with_orientation(orientation: u16) -> Vec<u8> {
        let tiff: Vec<u8> = [
            b"II".as_slice(),               // リトルエンディアン
            &[42, 0, 8, 0, 0, 0],           // マジック + 最初の IFD オフセット
            &[1, 0],                        // エントリ数 1
            &[0x12, 0x01, 3, 0, 1, 0, 0, 0], // Orientation, SHORT, count 1
            &orientation.to_le_bytes(),
            &[0, 0],                        // 値のパディング
            &[0, 0, 0, 0],                  // 次の IFD なし
        ]
        .concat();
        let payload: Vec<u8> = [b"Exif\0\0".as_slice(), &tiff].concat();
        let segment_len = (payload.len() + 2) as u16;
        [
            &[0xFF, 0xD8][..],
            &[0xFF, 0xE1],
            &segment_len.to_be_bytes(),
            &payload,
            &[0xFF, 0xD9],
        ]
        .concat()
    }

    #[test]
    fn read_orientation_extracts_the_exif_tag() {
        assert_eq!(read_orientation(&jpeg_with_orientation(6)), Some(6));
        assert_eq!(read_orientation(&jpeg_with_orientation(1)), Some(1));
    }

    #[test]
    fn read_orientation_returns_none_without_exif() {
        let mut bytes = vec![];
        two_pixel_image()
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        assert_eq!(read_orientation(&bytes), None);
    }

    #[test]
    fn prepare_photo_bounds_output_size() {
        let big = DynamicImage::ImageRgb8(image::RgbImage::new(3000, 1000));
        let mut bytes = vec![];
        big.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg).unwrap();

        let prepared = prepare_photo(&bytes).unwrap();
        let (width, height) = prepared.dimensions();
        assert!(width <= EMBED_MAX_W);
        assert!(height <= EMBED_MAX_H);
        // 縦横比は維持される
        assert_eq!(width, 480);
        assert_eq!(height, 160);
    }

    #[test]
    fn prepare_photo_rejects_garbage() {
        assert!(prepare_photo(b"not an image").is_err());
    }
}
