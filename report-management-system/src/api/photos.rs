use std::io::Read;

use actix_easy_multipart::{tempfile::Tempfile, text::Text, MultipartForm};
use actix_web::{post, web};
use chrono::Local;
use domain_report::{
    exception::ReportException,
    model::{
        entity::{photo::PhotoType, Photo},
        vo::PhotoPathSpec,
    },
};
use serde::Serialize;

use crate::api::{ApiError, ApiResult};
use crate::infrastructure::ServiceProvider;

#[derive(MultipartForm)]
pub struct PhotoUploadRequest {
    pub photos: Vec<Tempfile>,
    pub photo_type: Text<String>,
    pub caption: Option<Text<String>>,
    pub room_name: Option<Text<String>>,
    pub air_conditioner_id: Option<Text<i32>>,
    pub work_item_id: Option<Text<i32>>,
}

#[derive(Serialize)]
pub struct PhotoUploadedResponse {
    pub uploaded: Vec<i32>,
}

/// 施工前後写真のアップロード。顧客＞物件＞エアコン＞作業項目＞作業日の
/// 階層に保存し、相対パスを Photo 行へ記録する
#[post("reports/{id}/photos")]
pub async fn upload_photos(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    form: MultipartForm<PhotoUploadRequest>,
) -> ApiResult<web::Json<PhotoUploadedResponse>> {
    let report_id = *id;
    let report = sp
        .report_repository
        .get_by_id(report_id)
        .await
        .map_err(|_| ReportException::NotFound { id: report_id })?;

    let photo_type: PhotoType =
        form.photo_type.parse().map_err(|_| ApiError::BadRequest {
            message: format!("invalid photo type: {}", form.photo_type.as_str()),
        })?;

    let property = sp.property_repository.get_by_id(report.property_id).await.ok();
    let customer = match &property {
        Some(property) => sp.customer_repository.get_by_id(property.customer_id).await.ok(),
        None => None,
    };
    let air_conditioner = match form.air_conditioner_id.as_ref() {
        Some(id) => sp.air_conditioner_repository.get_by_id(id.0).await.ok(),
        None => None,
    };
    let work_item = match form.work_item_id.as_ref() {
        Some(id) => sp.work_item_repository.get_by_id(id.0).await.ok(),
        None => None,
    };

    let spec = PhotoPathSpec {
        photo_type,
        customer,
        property,
        air_conditioner: air_conditioner.clone(),
        work_item: work_item.clone(),
        work_date: Some(report.date),
    };

    let mut uploaded = vec![];
    let now = Local::now().naive_local();
    for file in &form.photos {
        let original_filename = file.file_name.clone().unwrap_or_else(|| "photo.jpg".to_string());

        let mut content = vec![];
        file.file
            .as_file()
            .read_to_end(&mut content)
            .map_err(|e| ApiError::Internal(e.into()))?;

        let stored = sp.photo_storage_service.save(&spec, &original_filename, &content).await?;

        let photo = Photo {
            id: 0,
            photo_type,
            filename: stored.filename,
            original_filename: Some(original_filename),
            caption: form.caption.as_ref().map(|c| c.0.clone()),
            room_name: form.room_name.as_ref().map(|r| r.0.clone()),
            photo_set_id: None,
            aircon_model: air_conditioner.as_ref().and_then(|ac| ac.model_number.clone()),
            note: None,
            filepath: Some(stored.relative_path),
            report_id,
            air_conditioner_id: air_conditioner.as_ref().map(|ac| ac.id),
            work_item_id: work_item.as_ref().map(|item| item.id),
            created_at: now,
            updated_at: now,
        };
        let photo_id = sp.photo_repository.insert(&photo).await.map_err(ApiError::Internal)?;
        uploaded.push(photo_id);
    }

    Ok(web::Json(PhotoUploadedResponse { uploaded }))
}

/// 写真 1 枚の削除（行とファイルの両方）
#[post("reports/{report_id}/photos/{photo_id}/delete")]
pub async fn delete_photo(
    sp: web::Data<ServiceProvider>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<serde_json::Value>> {
    let (report_id, photo_id) = path.into_inner();

    let photo = sp
        .photo_repository
        .get_by_id(photo_id)
        .await
        .map_err(|_| ReportException::PhotoNotFound { id: photo_id })?;
    if photo.report_id != report_id {
        return Err(ApiError::BadRequest {
            message: "photo does not belong to the report".to_string(),
        });
    }

    if let Some(filepath) = photo.filepath.as_deref() {
        sp.photo_storage_service.remove(filepath).await?;
    }
    sp.photo_repository.delete_by_id(photo_id).await.map_err(ApiError::Internal)?;

    Ok(web::Json(serde_json::json!({ "deleted": true })))
}
