use actix_web::{get, post, web};
use chrono::Local;
use domain_schedule::{
    exception::ScheduleException,
    model::{
        entity::Schedule,
        vo::{ScheduleForm, ScheduleListFilter},
    },
};
use serde::Serialize;

use crate::api::{ApiError, ApiResult};
use crate::infrastructure::ServiceProvider;

#[derive(Serialize)]
pub struct ScheduleSavedResponse {
    pub id: i32,
}

#[get("schedules")]
pub async fn list_schedules(
    sp: web::Data<ServiceProvider>,
    filter: web::Query<ScheduleListFilter>,
) -> ApiResult<web::Json<Vec<Schedule>>> {
    let schedules = sp.schedule_repository.list(&filter).await.map_err(ApiError::Internal)?;
    Ok(web::Json(schedules))
}

#[get("schedules/{id}")]
pub async fn get_schedule(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<Schedule>> {
    let schedule = sp
        .schedule_repository
        .get_by_id(*id)
        .await
        .map_err(|_| ScheduleException::NotFound { id: *id })?;
    Ok(web::Json(schedule))
}

/// 手動スケジュールの作成。報告書由来のものは同期サービスが作る
#[post("schedules")]
pub async fn create_schedule(
    sp: web::Data<ServiceProvider>,
    form: web::Json<ScheduleForm>,
) -> ApiResult<web::Json<ScheduleSavedResponse>> {
    validate(&form)?;
    let now = Local::now().naive_local();
    let schedule = Schedule {
        id: 0,
        title: form.title.clone(),
        description: form.description.clone(),
        start_datetime: form.start_datetime,
        end_datetime: form.end_datetime,
        all_day: form.all_day,
        status: form.status.unwrap_or_default(),
        priority: form.priority.unwrap_or_default(),
        customer_id: form.customer_id,
        property_id: form.property_id,
        report_id: None,
        google_calendar_id: None,
        google_calendar_sync: false,
        recurrence_type: None,
        recurrence_end: None,
        notification_enabled: form.notification_enabled.unwrap_or(true),
        notification_minutes: form.notification_minutes.unwrap_or(30),
        created_by: None,
        created_at: now,
        updated_at: now,
    };
    let id = sp.schedule_repository.insert(&schedule).await.map_err(ApiError::Internal)?;
    Ok(web::Json(ScheduleSavedResponse { id }))
}

#[post("schedules/{id}/edit")]
pub async fn edit_schedule(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
    form: web::Json<ScheduleForm>,
) -> ApiResult<web::Json<ScheduleSavedResponse>> {
    validate(&form)?;
    let mut schedule = sp
        .schedule_repository
        .get_by_id(*id)
        .await
        .map_err(|_| ScheduleException::NotFound { id: *id })?;

    schedule.title = form.title.clone();
    schedule.description = form.description.clone();
    schedule.start_datetime = form.start_datetime;
    schedule.end_datetime = form.end_datetime;
    schedule.all_day = form.all_day;
    if let Some(status) = form.status {
        schedule.status = status;
    }
    if let Some(priority) = form.priority {
        schedule.priority = priority;
    }
    schedule.customer_id = form.customer_id;
    schedule.property_id = form.property_id;
    if let Some(enabled) = form.notification_enabled {
        schedule.notification_enabled = enabled;
    }
    if let Some(minutes) = form.notification_minutes {
        schedule.notification_minutes = minutes;
    }
    schedule.updated_at = Local::now().naive_local();

    sp.schedule_repository.update(&schedule).await.map_err(ApiError::Internal)?;
    Ok(web::Json(ScheduleSavedResponse { id: *id }))
}

#[post("schedules/{id}/delete")]
pub async fn delete_schedule(
    sp: web::Data<ServiceProvider>,
    id: web::Path<i32>,
) -> ApiResult<web::Json<serde_json::Value>> {
    sp.schedule_repository
        .get_by_id(*id)
        .await
        .map_err(|_| ScheduleException::NotFound { id: *id })?;
    sp.schedule_repository.delete_by_id(*id).await.map_err(ApiError::Internal)?;
    Ok(web::Json(serde_json::json!({ "deleted": true })))
}

fn validate(form: &ScheduleForm) -> Result<(), ScheduleException> {
    if form.title.is_empty() {
        return Err(ScheduleException::InvalidForm {
            reason: "title is required".to_string(),
        });
    }
    if form.end_datetime < form.start_datetime {
        return Err(ScheduleException::InvalidForm {
            reason: "end_datetime is before start_datetime".to_string(),
        });
    }
    Ok(())
}
