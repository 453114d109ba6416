use actix_web::{get, post, web, HttpResponse};
use domain_report::model::{
    entity::Report,
    vo::{sanitize_filename, ReportForm, ReportListFilter, ReportPdfData},
};

use crate::api::dtos::{DeletedResponse, PdfQuery, PdfSavedResponse, ReportSavedResponse};
use crate::api::{ApiError, ApiResult};
use crate::infrastructure::ServiceProvider;

#[post("reports")]
pub async fn create_report(
    sp: web::Data<ServiceProvider>,
    form: web::Json<ReportForm>,
) -> ApiResult<web::Json<ReportSavedResponse>> {
    let (id, warnings) = sp.report_service.create(&form).await?;
    Ok(web::Json(ReportSavedResponse { id, warnings }))
}

#[get("reports")]
pub async fn list_reports(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<ReportListFilter>,
) -> ApiResult<web::Json<Vec<Report>>> {
    let reports = sp.report_service.list(&filter).await?;
    Ok(web::Json(reports))
}

#[get("reports/{id}")]
pub async fn get_report(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ReportPdfData>> {
    let detail = sp.report_service.get_detail(*id).await?;
    Ok(web::Json(detail))
}

#[post("reports/{id}/edit")]
pub async fn edit_report(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    form: web::Json<ReportForm>,
) -> ApiResult<web::Json<ReportSavedResponse>> {
    let warnings = sp.report_service.update(*id, &form).await?;
    Ok(web::Json(ReportSavedResponse { id: *id, warnings }))
}

#[post("reports/{id}/delete")]
pub async fn delete_report(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let warnings = sp.report_service.delete(*id).await?;
    Ok(web::Json(DeletedResponse {
        deleted: true,
        warnings,
    }))
}

/// PDF ダウンロード。`?save=1` でダウンロードせずサーバー側へ保存する
#[get("reports/{id}/pdf")]
pub async fn download_pdf(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    query: web::Query<PdfQuery>,
) -> Result<HttpResponse, ApiError> {
    let data = sp.report_service.get_detail(*id).await?;
    let save_to_disk = query.save == 1;
    let output = sp.pdf_service.generate(&data, save_to_disk).await?;

    if save_to_disk {
        return Ok(HttpResponse::Ok().json(PdfSavedResponse {
            saved_path: output.saved_path,
        }));
    }

    let filename = download_filename(&data);
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename*=UTF-8''{}", rfc5987_encode(&filename)),
        ))
        .body(output.bytes))
}

fn download_filename(data: &ReportPdfData) -> String {
    let customer_name = data
        .customer
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("unknown");
    let property_name = data
        .property
        .as_ref()
        .map(|p| p.name.as_str())
        .unwrap_or("unknown");
    sanitize_filename(&format!(
        "作業完了報告書_{customer_name}_{property_name}_{}.pdf",
        data.report.date.format("%Y%m%d")
    ))
}

/// RFC 5987 の filename* 用エンコード。ASCII ヘッダに日本語名を通す
fn rfc5987_encode(value: &str) -> String {
    let mut encoded = String::new();
    for byte in value.as_bytes() {
        match byte {
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-' | b'_' | b'~' => {
                encoded.push(*byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc5987_keeps_ascii_and_escapes_the_rest() {
        assert_eq!(rfc5987_encode("report_1.pdf"), "report_1.pdf");
        assert_eq!(rfc5987_encode("a b"), "a%20b");
        // 「報」の UTF-8 表現
        assert_eq!(rfc5987_encode("報"), "%E5%A0%B1");
    }

    #[test]
    fn download_filename_embeds_customer_property_and_date() {
        let mut data = ReportPdfData::default();
        data.report.date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        data.customer = Some(domain_crm::model::entity::Customer {
            name: "田中".to_string(),
            ..Default::default()
        });
        data.property = Some(domain_crm::model::entity::Property {
            name: "田中様邸".to_string(),
            ..Default::default()
        });
        assert_eq!(
            download_filename(&data),
            "作業完了報告書_田中_田中様邸_20250601.pdf"
        );
    }
}
