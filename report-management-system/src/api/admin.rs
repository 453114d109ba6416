use actix_web::{get, post, web};
use database_model::system::prelude::*;
use sea_orm::prelude::*;
use tracing::info;

use crate::api::dtos::{DataDump, ImportedResponse};
use crate::api::{ApiError, ApiResult};
use crate::infrastructure::ServiceProvider;

/// 全テーブルの JSON 一括エクスポート（バックアップ用途）
#[get("admin/export")]
pub async fn export_data(sp: web::Data<ServiceProvider>) -> ApiResult<web::Json<DataDump>> {
    let conn = sp.database.get_connection();
    let dump = DataDump {
        customers: CustomerEntity::find().all(conn).await.map_err(to_api_error)?,
        properties: PropertyEntity::find().all(conn).await.map_err(to_api_error)?,
        air_conditioners: AirConditionerEntity::find().all(conn).await.map_err(to_api_error)?,
        work_items: WorkItemEntity::find().all(conn).await.map_err(to_api_error)?,
        users: UserEntity::find().all(conn).await.map_err(to_api_error)?,
        reports: ReportEntity::find().all(conn).await.map_err(to_api_error)?,
        work_times: WorkTimeEntity::find().all(conn).await.map_err(to_api_error)?,
        work_details: WorkDetailEntity::find().all(conn).await.map_err(to_api_error)?,
        photos: PhotoEntity::find().all(conn).await.map_err(to_api_error)?,
        schedules: ScheduleEntity::find().all(conn).await.map_err(to_api_error)?,
    };
    Ok(web::Json(dump))
}

/// エクスポート形式の一括リストア。id も含めてそのまま挿入する。
/// 参照整合性のため親テーブルから順に流し込む
#[post("admin/import")]
pub async fn import_data(
    sp: web::Data<ServiceProvider>,
    dump: web::Json<DataDump>,
) -> ApiResult<web::Json<ImportedResponse>> {
    let conn = sp.database.get_connection();
    let dump = dump.into_inner();
    let mut imported = 0;

    for model in dump.customers {
        CustomerEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.properties {
        PropertyEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.air_conditioners {
        AirConditionerEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.work_items {
        WorkItemEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.users {
        UserEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.reports {
        ReportEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.work_times {
        WorkTimeEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.work_details {
        WorkDetailEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.photos {
        PhotoEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }
    for model in dump.schedules {
        ScheduleEntity::insert(model.into_set()).exec(conn).await.map_err(to_api_error)?;
        imported += 1;
    }

    info!("bulk import finished: {imported} row(s)");
    Ok(web::Json(ImportedResponse { imported }))
}

fn to_api_error(e: sea_orm::DbErr) -> ApiError {
    ApiError::Internal(e.into())
}
