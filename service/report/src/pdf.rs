use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use domain_crm::model::entity::{Customer, Property};
use domain_report::{
    exception::{ReportException, ReportResult},
    model::{
        entity::Report,
        vo::{sanitize_filename, PdfOutput, PhotoPair, PhotoView, ReportPdfData},
    },
    service::ReportPdfService,
};
use tracing::{error, warn};
use typed_builder::TypedBuilder;

use crate::document::{DocumentBuilder, PhotoCell};
use crate::orientation::prepare_photo;

/// 1 ページあたりの写真セット数
const PHOTOS_PER_PAGE: usize = 2;

/// 作業完了報告書 PDF の組み立て
///
/// 本文（報告者・顧客・作業時間・作業内容）とギャラリーを 1 つの
/// ビルダーに節として積む。ギャラリーは必ず新しいページから始まる。
#[derive(TypedBuilder)]
pub struct ReportPdfServiceImpl {
    /// 写真と生成 PDF を置くアップロードルート
    #[builder(setter(into))]
    upload_base: PathBuf,
}

#[async_trait]
impl ReportPdfService for ReportPdfServiceImpl {
    async fn generate(
        &self,
        data: &ReportPdfData,
        save_to_disk: bool,
    ) -> ReportResult<PdfOutput> {
        let bytes = self.render(data)?;

        let saved_path = if save_to_disk {
            self.persist(&data.report, data.customer.as_ref(), data.property.as_ref(), &bytes)
                .await
        } else {
            None
        };

        Ok(PdfOutput { bytes, saved_path })
    }
}

impl ReportPdfServiceImpl {
    fn render(&self, data: &ReportPdfData) -> ReportResult<Vec<u8>> {
        let mut doc = DocumentBuilder::new(&format!("作業完了書_{}", data.report.id))
            .map_err(|e| ReportException::PdfRender {
                reason: e.to_string(),
            })?;

        self.body_section(&mut doc, data);

        if data.photo_pairs.iter().any(|pair| !pair.is_empty()) {
            self.gallery_section(&mut doc, &data.photo_pairs);
        }

        doc.save().map_err(|e| ReportException::PdfRender {
            reason: e.to_string(),
        })
    }

    fn body_section(&self, doc: &mut DocumentBuilder, data: &ReportPdfData) {
        let report = &data.report;

        doc.title_row("作業完了報告書", &format!("ID: {}", report.id));
        doc.spacer(4.0);

        // 報告者情報（自社の固定値）
        doc.heading("＜報告者＞");
        doc.key_value_table(&[
            ("報告者", "クリーンアップ".to_string()),
            ("連絡先", "〒635-0814 奈良県北葛城郡広陵町南郷１０５７－５".to_string()),
            ("担当者", "植田".to_string()),
            ("TEL", "０８０－４６４６－２２６６".to_string()),
        ]);
        doc.spacer(4.0);

        // 顧客・物件情報
        let customer_label = match &data.customer {
            Some(customer) => customer.display_name(),
            None => "不明".to_string(),
        };
        let property_label = match &data.property {
            Some(property) => property.name.clone(),
            None => "不明".to_string(),
        };
        let address = report
            .work_address
            .clone()
            .filter(|a| !a.is_empty())
            .or_else(|| data.property.as_ref().and_then(|p| p.address.clone()))
            .unwrap_or_default();

        doc.heading("＜顧客情報＞");
        let mut customer_rows = vec![
            ("お客様", customer_label),
            ("作業場所", property_label),
            ("住所", address),
        ];
        if let Some(note) = data
            .property
            .as_ref()
            .and_then(|p| p.note.clone())
            .filter(|n| !n.is_empty())
        {
            customer_rows.push(("備考", note));
        }
        doc.key_value_table(&customer_rows);
        doc.spacer(4.0);

        // 作業日時
        doc.heading("＜作業日時＞");
        if data.work_times.is_empty() {
            doc.paragraph("作業日時情報なし", 10.0);
        } else {
            let rows: Vec<Vec<String>> = data
                .work_times
                .iter()
                .map(|work_time| {
                    vec![
                        work_time.work_date.format("%Y-%m-%d").to_string(),
                        work_time.start_time.format("%H:%M").to_string(),
                        work_time.end_time.format("%H:%M").to_string(),
                        work_time.note.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            doc.data_table(
                &["日付", "開始時間", "終了時間", "備考"],
                &rows,
                &[28.0, 21.0, 21.0, 104.0],
            );
        }
        doc.spacer(4.0);

        // 作業内容
        doc.heading("＜作業内容＞");
        if data.work_details.is_empty() {
            doc.paragraph("作業内容情報なし", 10.0);
        } else {
            let rows: Vec<Vec<String>> = data
                .work_details
                .iter()
                .map(|view| {
                    let ac_info = view
                        .air_conditioner
                        .as_ref()
                        .map(|ac| ac.summary())
                        .unwrap_or_default();
                    vec![
                        ac_info,
                        view.work_item_name(),
                        view.detail.description.clone(),
                        view.detail.confirmation.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            doc.data_table(
                &["エアコン情報", "作業項目", "内容", "確認"],
                &rows,
                &[46.0, 32.0, 71.0, 25.0],
            );
        }
        doc.spacer(4.0);

        // 備考
        if let Some(note) = report.note.as_deref().filter(|n| !n.is_empty()) {
            doc.heading("＜備考＞");
            doc.paragraph(note, 10.0);
            doc.spacer(4.0);
        }
    }

    fn gallery_section(&self, doc: &mut DocumentBuilder, photo_pairs: &[PhotoPair]) {
        // ギャラリーは本文と混ざらないよう必ず新しいページから
        doc.page_break();
        doc.heading("＜施工前後写真＞");
        doc.spacer(3.0);

        for (group_index, group) in photo_pairs.chunks(PHOTOS_PER_PAGE).enumerate() {
            if group_index > 0 {
                doc.page_break();
                doc.heading("＜施工前後写真＞");
                doc.spacer(3.0);
            }

            for (i, pair) in group.iter().enumerate() {
                if pair.is_empty() {
                    continue;
                }
                if i > 0 {
                    doc.divider();
                }

                doc.ensure_space(DocumentBuilder::photo_set_height());
                let set_number = group_index * PHOTOS_PER_PAGE + i + 1;
                doc.centered_paragraph(&format!("写真 #{set_number}"), 12.0, true);

                // エアコン・作業項目のラベルは前後どちらかの写真から解決する
                let labeled = pair.before.as_ref().or(pair.after.as_ref());
                if let Some(ac) = labeled.and_then(|view| view.air_conditioner.as_ref()) {
                    let location = ac.location.as_deref().unwrap_or("");
                    doc.paragraph(
                        &format!(
                            "エアコン: {} {} ({location})",
                            ac.manufacturer.as_deref().unwrap_or(""),
                            ac.model_number.as_deref().unwrap_or(""),
                        ),
                        8.0,
                    );
                }
                if let Some(item) = labeled.and_then(|view| view.work_item.as_ref()) {
                    doc.paragraph(&format!("作業項目: {}", item.name), 8.0);
                }
                doc.spacer(2.0);

                doc.photo_table([
                    self.photo_cell(pair.before.as_ref()),
                    self.photo_cell(pair.after.as_ref()),
                ]);
                doc.spacer(5.0);
            }
        }
    }

    /// 写真 1 枚分のセル内容とキャプションを作る。
    /// 読み込み失敗は差し替えテキストに落とし、文書全体は壊さない
    fn photo_cell(&self, view: Option<&PhotoView>) -> (PhotoCell, String) {
        let Some(view) = view else {
            return (PhotoCell::Text("画像なし".to_string()), String::new());
        };

        let fallback_caption = view.photo.photo_type.label_ja().to_string();
        let Some(filepath) = view.photo.filepath.as_deref().filter(|p| !p.is_empty()) else {
            return (PhotoCell::Text("画像なし".to_string()), fallback_caption);
        };

        let path = self.upload_base.join(filepath);
        let prepared = std::fs::read(&path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| prepare_photo(&bytes));
        match prepared {
            Ok(image) => {
                let mut caption = view.photo.caption.clone().unwrap_or_default();
                if let Some(room) = view.photo.room_name.as_deref().filter(|r| !r.is_empty()) {
                    caption = format!("{room}: {caption}");
                }
                (PhotoCell::Image(image), caption)
            }
            Err(e) => {
                warn!("photo #{}: could not load {path:?}: {e}", view.photo.id);
                (
                    PhotoCell::Text("画像を読み込めませんでした".to_string()),
                    fallback_caption,
                )
            }
        }
    }

    /// 顧客名・物件名で掘ったディレクトリへ保存する。失敗しても
    /// 生成自体は成功として扱う
    async fn persist(
        &self,
        report: &Report,
        customer: Option<&Customer>,
        property: Option<&Property>,
        bytes: &[u8],
    ) -> Option<PathBuf> {
        let customer_name = sanitize_filename(
            customer.map(|c| c.name.as_str()).unwrap_or("unknown"),
        );
        let property_name = sanitize_filename(
            property.map(|p| p.name.as_str()).unwrap_or("unknown"),
        );

        let dir = self.upload_base.join("PDF").join(&customer_name).join(&property_name);
        let date_str = report.date.format("%Y%m%d").to_string();
        let time_str = Local::now().format("%H%M%S").to_string();
        let filename =
            format!("作業完了報告書_{customer_name}_{property_name}_{date_str}_{time_str}.pdf");
        let path = dir.join(filename);

        let result = async {
            tokio::fs::create_dir_all(&dir).await?;
            tokio::fs::write(&path, bytes).await?;
            Ok::<_, std::io::Error>(())
        }
        .await;

        match result {
            Ok(()) => Some(path),
            Err(e) => {
                error!("failed to save pdf to {path:?}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use chrono::NaiveDate;
    use domain_crm::model::entity::AirConditioner;
    use domain_report::model::{
        entity::{photo::PhotoType, Photo, WorkDetail, WorkTime},
        vo::WorkDetailView,
    };
    use image::DynamicImage;

    use super::*;

    fn page_count(bytes: &[u8]) -> usize {
        lopdf::Document::load_mem(bytes).unwrap().get_pages().len()
    }

    fn temp_base() -> PathBuf {
        let base = std::env::temp_dir().join(format!("report-pdf-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&base).unwrap();
        base
    }

    fn service(base: &PathBuf) -> ReportPdfServiceImpl {
        ReportPdfServiceImpl::builder().upload_base(base.clone()).build()
    }

    fn base_data() -> ReportPdfData {
        ReportPdfData {
            report: Report {
                id: 42,
                title: "作業完了書".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                note: Some("フィルター交換推奨".to_string()),
                property_id: 7,
                ..Default::default()
            },
            customer: Some(Customer {
                id: 3,
                name: "田中".to_string(),
                company_name: Some("田中商事".to_string()),
                ..Default::default()
            }),
            property: Some(Property {
                id: 7,
                name: "田中様邸".to_string(),
                address: Some("奈良県北葛城郡".to_string()),
                customer_id: 3,
                ..Default::default()
            }),
            work_times: vec![WorkTime {
                work_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                end_time: chrono::NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                note: Some("午前中に完了".to_string()),
                report_id: 42,
                property_id: 7,
                ..Default::default()
            }],
            work_details: vec![WorkDetailView {
                detail: WorkDetail {
                    description: "室内機の分解洗浄".to_string(),
                    work_item_text: Some("エアコンクリーニング".to_string()),
                    report_id: 42,
                    ..Default::default()
                },
                air_conditioner: Some(AirConditioner {
                    manufacturer: Some("ダイキン".to_string()),
                    model_number: Some("AN22YRS".to_string()),
                    location: Some("リビング".to_string()),
                    ..Default::default()
                }),
                work_item: None,
            }],
            photo_pairs: vec![],
        }
    }

    fn write_jpeg(base: &PathBuf, relative: &str) {
        let path = base.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(640, 480));
        let mut bytes = vec![];
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg).unwrap();
        std::fs::write(path, bytes).unwrap();
    }

    fn photo_pair(base: &PathBuf, with_files: bool) -> PhotoPair {
        let relative = "before/x/1.jpg";
        if with_files {
            write_jpeg(base, relative);
        }
        PhotoPair {
            before: Some(PhotoView {
                photo: Photo {
                    id: 1,
                    photo_type: PhotoType::Before,
                    filepath: Some(relative.to_string()),
                    room_name: Some("リビング".to_string()),
                    caption: Some("清掃前".to_string()),
                    report_id: 42,
                    ..Default::default()
                },
                ..Default::default()
            }),
            after: None,
        }
    }

    #[tokio::test]
    async fn report_without_photos_renders_single_body_document() {
        let base = temp_base();
        let output = service(&base).generate(&base_data(), false).await.unwrap();
        assert!(output.saved_path.is_none());
        assert!(page_count(&output.bytes) >= 1);
        std::fs::remove_dir_all(&base).ok();
    }

    #[tokio::test]
    async fn gallery_adds_pages_after_the_body() {
        let base = temp_base();

        let body_only = service(&base).generate(&base_data(), false).await.unwrap();
        let body_pages = page_count(&body_only.bytes);

        let mut data = base_data();
        // 3 ペアは 2 セット/ページなのでギャラリーは 2 ページになる
        data.photo_pairs = vec![
            photo_pair(&base, true),
            photo_pair(&base, true),
            photo_pair(&base, true),
        ];
        let with_gallery = service(&base).generate(&data, false).await.unwrap();

        assert_eq!(page_count(&with_gallery.bytes), body_pages + 2);
        std::fs::remove_dir_all(&base).ok();
    }

    #[tokio::test]
    async fn missing_photo_files_degrade_to_placeholder_cells() {
        let base = temp_base();
        let mut data = base_data();
        data.photo_pairs = vec![photo_pair(&base, false)];

        // ファイルが無くても文書は生成される
        let output = service(&base).generate(&data, false).await.unwrap();
        assert!(page_count(&output.bytes) >= 2);
        std::fs::remove_dir_all(&base).ok();
    }

    #[tokio::test]
    async fn save_to_disk_writes_under_customer_and_property() {
        let base = temp_base();
        let output = service(&base).generate(&base_data(), true).await.unwrap();

        let path = output.saved_path.expect("pdf should be saved");
        assert!(path.exists());
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("PDF"));
        assert!(path_str.contains("田中"));
        assert!(path_str.contains("田中様邸"));
        assert!(path_str.contains("作業完了報告書_"));
        assert!(path_str.contains("20250601"));
        std::fs::remove_dir_all(&base).ok();
    }

    #[tokio::test]
    async fn empty_pairs_do_not_produce_a_gallery() {
        let base = temp_base();
        let mut data = base_data();
        data.photo_pairs = vec![PhotoPair::default()];

        let body_only = service(&base).generate(&base_data(), false).await.unwrap();
        let with_empty_pair = service(&base).generate(&data, false).await.unwrap();
        assert_eq!(page_count(&with_empty_pair.bytes), page_count(&body_only.bytes));
        std::fs::remove_dir_all(&base).ok();
    }
}
