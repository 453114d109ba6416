use actix_web::{get, post, web};
use domain_schedule::model::vo::MailContent;

use crate::api::dtos::{
    NotificationStatusResponse, SentCountResponse, SentResponse, TestMailRequest,
};
use crate::api::{ApiError, ApiResult};
use crate::infrastructure::ServiceProvider;

#[get("notifications/status")]
pub async fn notification_status(
    sp: web::Data<ServiceProvider>,
) -> ApiResult<web::Json<NotificationStatusResponse>> {
    Ok(web::Json(NotificationStatusResponse {
        mail_configured: sp.mail_service.is_configured(),
        enabled: sp.config.notification.enabled,
        check_interval: sp.config.notification.check_interval,
    }))
}

/// 定期ジョブを待たずに通知チェックを 1 回実行する
#[post("notifications/check")]
pub async fn trigger_notification_check(
    sp: web::Data<ServiceProvider>,
) -> ApiResult<web::Json<SentCountResponse>> {
    let sent_count = sp.notification_service.check_and_send().await.map_err(ApiError::Internal)?;
    Ok(web::Json(SentCountResponse { sent_count }))
}

/// メール設定の疎通確認
#[post("notifications/test")]
pub async fn send_test_mail(
    sp: web::Data<ServiceProvider>,
    request: web::Json<TestMailRequest>,
) -> ApiResult<web::Json<SentResponse>> {
    let content = MailContent {
        subject: "【テスト】メール設定確認".to_string(),
        html_body: "<p>エアコンクリーニング完了報告書システムからのテストメールです。</p>"
            .to_string(),
        text_body: "エアコンクリーニング完了報告書システムからのテストメールです。".to_string(),
    };
    sp.mail_service
        .send(&[request.to.clone()], &content)
        .await
        .map_err(ApiError::Internal)?;
    Ok(web::Json(SentResponse { sent: true }))
}
