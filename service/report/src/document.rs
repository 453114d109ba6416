use image::{DynamicImage, GenericImageView};
use printpdf::{
    BuiltinFont, Color, ImageTransform, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Rgb,
};

const PAGE_W: f64 = 210.0;
const PAGE_H: f64 = 297.0;
const MARGIN: f64 = 18.0;
const CONTENT_W: f64 = PAGE_W - MARGIN * 2.0;
const PT_TO_MM: f64 = 25.4 / 72.0;

/// セル内余白 (mm)
const CELL_PAD: f64 = 1.6;
/// 写真セルの画像ボックス
const PHOTO_BOX_W: f64 = 80.0;
const PHOTO_BOX_H: f64 = 60.0;

/// 写真テーブルのセル内容：画像か差し替えテキスト
pub enum PhotoCell {
    Image(DynamicImage),
    Text(String),
}

/// A4 縦のページを上から下へ埋めていく文書ビルダー
///
/// 見出し・表・写真ギャラリーを節単位で積むだけで改ページが面倒を見る。
/// 本文とギャラリーを別々の PDF にしてマージする必要はない。
pub struct DocumentBuilder {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    font_bold: IndirectFontRef,
    /// ページ上端からの距離 (mm)
    cursor: f64,
    pages: usize,
}

impl DocumentBuilder {
    pub fn new(title: &str) -> anyhow::Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_W as f32), Mm(PAGE_H as f32), "content");
        let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            font_bold,
            cursor: MARGIN,
            pages: 1,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn page_break(&mut self) {
        let (page, layer) = self.doc.add_page(Mm(PAGE_W as f32), Mm(PAGE_H as f32), "content");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = MARGIN;
        self.pages += 1;
    }

    /// 残り高さが足りなければ改ページする
    pub fn ensure_space(&mut self, needed: f64) {
        if self.cursor + needed > PAGE_H - MARGIN {
            self.page_break();
        }
    }

    pub fn spacer(&mut self, mm: f64) {
        self.cursor += mm;
    }

    /// タイトル行：左にタイトル、右に下線付き ID
    pub fn title_row(&mut self, left: &str, right: &str) {
        self.ensure_space(14.0);
        self.draw_text(left, 14.0, MARGIN, self.cursor, true);
        let right_w = text_width_mm(right, 11.0);
        let right_x = PAGE_W - MARGIN - right_w;
        self.draw_text(right, 11.0, right_x, self.cursor + 1.5, false);
        self.draw_hline(right_x, PAGE_W - MARGIN, self.cursor + 7.5, 0.5, 0.0);
        self.cursor += 12.0;
    }

    pub fn heading(&mut self, text: &str) {
        self.ensure_space(12.0);
        self.draw_text(text, 12.0, MARGIN, self.cursor, true);
        self.cursor += 8.0;
    }

    pub fn paragraph(&mut self, text: &str, size: f64) {
        let line_h = size * PT_TO_MM + 1.6;
        for line in wrap_text(text, CONTENT_W, size) {
            self.ensure_space(line_h);
            self.draw_text(&line, size, MARGIN, self.cursor, false);
            self.cursor += line_h;
        }
    }

    pub fn centered_paragraph(&mut self, text: &str, size: f64, bold: bool) {
        let line_h = size * PT_TO_MM + 1.6;
        for line in wrap_text(text, CONTENT_W, size) {
            self.ensure_space(line_h);
            let x = MARGIN + (CONTENT_W - text_width_mm(&line, size)) / 2.0;
            self.draw_text(&line, size, x, self.cursor, bold);
            self.cursor += line_h;
        }
    }

    /// 写真セット間の区切り線
    pub fn divider(&mut self) {
        self.ensure_space(8.0);
        self.cursor += 3.0;
        self.draw_hline(MARGIN, PAGE_W - MARGIN, self.cursor, 1.0, 0.5);
        self.cursor += 4.0;
    }

    /// ラベル列＋値列の 2 列表
    pub fn key_value_table(&mut self, rows: &[(&str, String)]) {
        const LABEL_W: f64 = 34.0;
        const FONT_SIZE: f64 = 10.0;
        let value_w = CONTENT_W - LABEL_W;
        let line_h = FONT_SIZE * PT_TO_MM + 1.4;

        for (label, value) in rows {
            let lines = wrap_text(value, value_w - CELL_PAD * 2.0, FONT_SIZE);
            let row_h = (lines.len() as f64 * line_h + CELL_PAD * 2.0).max(7.0);
            self.ensure_space(row_h);
            let top = self.cursor;

            self.draw_text(label, FONT_SIZE, MARGIN + CELL_PAD, top + CELL_PAD, false);
            for (i, line) in lines.iter().enumerate() {
                self.draw_text(
                    line,
                    FONT_SIZE,
                    MARGIN + LABEL_W + CELL_PAD,
                    top + CELL_PAD + i as f64 * line_h,
                    false,
                );
            }

            self.draw_hline(MARGIN, MARGIN + CONTENT_W, top, 0.5, 0.0);
            self.draw_hline(MARGIN, MARGIN + CONTENT_W, top + row_h, 0.5, 0.0);
            for x in [MARGIN, MARGIN + LABEL_W, MARGIN + CONTENT_W] {
                self.draw_vline(x, top, top + row_h, 0.5);
            }
            self.cursor += row_h;
        }
    }

    /// ヘッダー行付きの表。セルは折り返し、行高はセルの最長に合わせる
    pub fn data_table(&mut self, headers: &[&str], rows: &[Vec<String>], widths: &[f64]) {
        const FONT_SIZE: f64 = 10.0;
        let line_h = FONT_SIZE * PT_TO_MM + 1.4;

        // ヘッダー
        let header_h = 7.5;
        self.ensure_space(header_h + 7.0);
        let top = self.cursor;
        let mut x = MARGIN;
        for (header, width) in headers.iter().zip(widths) {
            self.draw_text(header, FONT_SIZE, x + CELL_PAD, top + CELL_PAD, true);
            x += width;
        }
        self.grid_row(widths, top, header_h);
        self.cursor += header_h;

        for row in rows {
            let wrapped: Vec<Vec<String>> = row
                .iter()
                .zip(widths)
                .map(|(cell, width)| wrap_text(cell, width - CELL_PAD * 2.0, FONT_SIZE))
                .collect();
            let max_lines = wrapped.iter().map(|lines| lines.len()).max().unwrap_or(1);
            let row_h = (max_lines as f64 * line_h + CELL_PAD * 2.0).max(7.0);
            self.ensure_space(row_h);
            let top = self.cursor;

            let mut x = MARGIN;
            for (lines, width) in wrapped.iter().zip(widths) {
                for (i, line) in lines.iter().enumerate() {
                    self.draw_text(
                        line,
                        FONT_SIZE,
                        x + CELL_PAD,
                        top + CELL_PAD + i as f64 * line_h,
                        false,
                    );
                }
                x += width;
            }
            self.grid_row(widths, top, row_h);
            self.cursor += row_h;
        }
    }

    /// 施工前｜施工後の 2 列写真テーブル（ヘッダー・画像・キャプション）
    pub fn photo_table(&mut self, cells: [(PhotoCell, String); 2]) {
        const FONT_SIZE: f64 = 9.0;
        let col_w = CONTENT_W / 2.0;
        let line_h = FONT_SIZE * PT_TO_MM + 1.4;
        let header_h = 7.5;
        let image_h = PHOTO_BOX_H + CELL_PAD * 2.0;

        let captions: Vec<Vec<String>> = cells
            .iter()
            .map(|(_, caption)| wrap_text(caption, col_w - CELL_PAD * 2.0, FONT_SIZE))
            .collect();
        let caption_lines = captions.iter().map(|lines| lines.len()).max().unwrap_or(1);
        let caption_h = caption_lines as f64 * line_h + CELL_PAD * 2.0;
        let total_h = header_h + image_h + caption_h;
        self.ensure_space(total_h);
        let top = self.cursor;
        let widths = [col_w, col_w];

        // ヘッダー行
        for (i, label) in ["施工前", "施工後"].iter().enumerate() {
            let x = MARGIN + i as f64 * col_w;
            let text_x = x + (col_w - text_width_mm(label, 10.0)) / 2.0;
            self.draw_text(label, 10.0, text_x, top + CELL_PAD, true);
        }
        self.grid_row(&widths, top, header_h);

        // 画像行
        let image_top = top + header_h;
        for (i, (cell, _)) in cells.iter().enumerate() {
            let x0 = MARGIN + i as f64 * col_w;
            match cell {
                PhotoCell::Image(img) => {
                    self.embed_image(img, x0, image_top + CELL_PAD, col_w);
                }
                PhotoCell::Text(text) => {
                    let text_x = x0 + (col_w - text_width_mm(text, FONT_SIZE)) / 2.0;
                    let text_y = image_top + image_h / 2.0;
                    self.draw_text(text, FONT_SIZE, text_x, text_y, false);
                }
            }
        }
        self.grid_row(&widths, image_top, image_h);

        // キャプション行
        let caption_top = image_top + image_h;
        for (i, lines) in captions.iter().enumerate() {
            let x0 = MARGIN + i as f64 * col_w;
            for (j, line) in lines.iter().enumerate() {
                let text_x = x0 + (col_w - text_width_mm(line, FONT_SIZE)) / 2.0;
                self.draw_text(
                    line,
                    FONT_SIZE,
                    text_x,
                    caption_top + CELL_PAD + j as f64 * line_h,
                    false,
                );
            }
        }
        self.grid_row(&widths, caption_top, caption_h);

        self.cursor += total_h;
    }

    pub fn save(self) -> anyhow::Result<Vec<u8>> {
        Ok(self.doc.save_to_bytes()?)
    }

    /// 写真テーブル 1 セット分の高さ概算（KeepTogether 相当の判定用）
    pub fn photo_set_height() -> f64 {
        7.5 + PHOTO_BOX_H + CELL_PAD * 2.0 + 12.0 + 14.0
    }

    fn embed_image(&self, img: &DynamicImage, x0: f64, y_top: f64, col_w: f64) {
        // 透過チャンネルは落として埋め込む
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
        let (px_w, px_h) = rgb.dimensions();
        if px_w == 0 || px_h == 0 {
            return;
        }
        let aspect = px_w as f64 / px_h as f64;
        let target_w = if aspect >= PHOTO_BOX_W / PHOTO_BOX_H {
            PHOTO_BOX_W
        } else {
            PHOTO_BOX_H * aspect
        };
        let dpi = px_w as f64 * 25.4 / target_w;
        let target_h = px_h as f64 * 25.4 / dpi;

        let x = x0 + (col_w - target_w) / 2.0;
        let y = y_top + (PHOTO_BOX_H - target_h) / 2.0;

        let pdf_image = printpdf::Image::from_dynamic_image(&rgb);
        pdf_image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x as f32)),
                translate_y: Some(Mm((PAGE_H - y - target_h) as f32)),
                dpi: Some(dpi as f32),
                ..Default::default()
            },
        );
    }

    fn draw_text(&self, text: &str, size: f64, x: f64, y_top: f64, bold: bool) {
        let font = if bold { &self.font_bold } else { &self.font };
        // 上端基準からベースラインへ下げる
        let baseline = y_top + size * PT_TO_MM * 0.85;
        self.layer
            .use_text(text, size as f32, Mm(x as f32), Mm((PAGE_H - baseline) as f32), font);
    }

    fn draw_hline(&self, x1: f64, x2: f64, y_top: f64, thickness: f64, grey: f64) {
        self.layer
            .set_outline_color(Color::Rgb(Rgb::new(grey as f32, grey as f32, grey as f32, None)));
        self.layer.set_outline_thickness(thickness as f32);
        let line = Line {
            points: vec![
                (Point::new(Mm(x1 as f32), Mm((PAGE_H - y_top) as f32)), false),
                (Point::new(Mm(x2 as f32), Mm((PAGE_H - y_top) as f32)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    fn draw_vline(&self, x: f64, y1_top: f64, y2_top: f64, thickness: f64) {
        self.layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(thickness as f32);
        let line = Line {
            points: vec![
                (Point::new(Mm(x as f32), Mm((PAGE_H - y1_top) as f32)), false),
                (Point::new(Mm(x as f32), Mm((PAGE_H - y2_top) as f32)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// 1 行分の罫線（上下の横線と列境界の縦線）
    fn grid_row(&self, widths: &[f64], top: f64, height: f64) {
        let right = MARGIN + widths.iter().sum::<f64>();
        self.draw_hline(MARGIN, right, top, 0.5, 0.0);
        self.draw_hline(MARGIN, right, top + height, 0.5, 0.0);
        let mut x = MARGIN;
        self.draw_vline(x, top, top + height, 0.5);
        for width in widths {
            x += width;
            self.draw_vline(x, top, top + height, 0.5);
        }
    }
}

/// Helvetica 基準のおおまかな文字幅 (em)。CJK は全角扱い
fn char_em(c: char) -> f64 {
    if c.is_ascii() {
        0.55
    } else {
        1.0
    }
}

pub fn text_width_mm(text: &str, font_size: f64) -> f64 {
    text.chars().map(char_em).sum::<f64>() * font_size * PT_TO_MM
}

/// セル幅に収まるよう文字単位で折り返す。既存の改行は維持する
pub fn wrap_text(text: &str, width_mm: f64, font_size: f64) -> Vec<String> {
    let mut lines = vec![];
    for raw_line in text.split('\n') {
        let mut current = String::new();
        let mut current_w = 0.0;
        for c in raw_line.chars() {
            let w = char_em(c) * font_size * PT_TO_MM;
            if current_w + w > width_mm && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_w = 0.0;
            }
            current.push(c);
            current_w += w;
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_text_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("短い備考", 100.0, 10.0), vec!["短い備考"]);
    }

    #[test]
    fn wrap_text_breaks_long_cjk_text() {
        let text = "あ".repeat(100);
        let lines = wrap_text(&text, 50.0, 10.0);
        assert!(lines.len() > 1);
        // 全文字が保存される
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn wrap_text_honors_embedded_newlines() {
        let lines = wrap_text("一行目\n二行目", 100.0, 10.0);
        assert_eq!(lines, vec!["一行目", "二行目"]);
    }

    #[test]
    fn wrap_text_of_empty_string_is_one_empty_line() {
        assert_eq!(wrap_text("", 100.0, 10.0), vec![""]);
    }

    #[test]
    fn cjk_text_is_wider_than_ascii() {
        assert!(text_width_mm("あいうえお", 10.0) > text_width_mm("aiueo", 10.0));
    }

    #[test]
    fn builder_counts_pages() {
        let mut doc = DocumentBuilder::new("test").unwrap();
        assert_eq!(doc.page_count(), 1);
        doc.heading("見出し");
        doc.page_break();
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn ensure_space_breaks_page_when_full() {
        let mut doc = DocumentBuilder::new("test").unwrap();
        for _ in 0..60 {
            doc.heading("とても長いページを作るための見出し");
        }
        assert!(doc.page_count() > 1);
    }

    #[test]
    fn saved_document_is_non_empty_pdf() {
        let mut doc = DocumentBuilder::new("test").unwrap();
        doc.title_row("作業完了報告書", "ID: 1");
        doc.key_value_table(&[("報告者", "クリーンアップ".to_string())]);
        let bytes = doc.save().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
