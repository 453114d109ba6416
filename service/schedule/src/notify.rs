use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use domain_crm::repository::{CustomerRepo, PropertyRepo, UserRepo};
use domain_schedule::{
    model::{
        entity::Schedule,
        vo::{MailContent, NotificationKind},
    },
    repository::ScheduleRepo,
    service::{MailService, NotificationService},
};
use tracing::{debug, error, info, warn};
use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct NotificationServiceImpl {
    schedule_repository: Arc<dyn ScheduleRepo>,
    customer_repository: Arc<dyn CustomerRepo>,
    property_repository: Arc<dyn PropertyRepo>,
    user_repository: Arc<dyn UserRepo>,
    mail_service: Arc<dyn MailService>,
}

#[async_trait]
impl NotificationService for NotificationServiceImpl {
    async fn check_and_send(&self) -> anyhow::Result<usize> {
        if !self.mail_service.is_configured() {
            debug!("mail is not configured, skipping notification sweep");
            return Ok(0);
        }

        let now = Local::now().naive_local();
        let schedules = self.schedule_repository.get_pending_notifiable().await?;

        let mut sent_count = 0;
        for schedule in &schedules {
            for kind in schedule.due_notifications(now) {
                match self.send_schedule_notification(schedule, kind).await {
                    Ok(true) => {
                        sent_count += 1;
                        info!("schedule #{}: sent {kind:?} notification", schedule.id);
                    }
                    Ok(false) => {}
                    Err(e) => {
                        // 1 件の失敗で走査を止めない
                        error!("schedule #{}: notification failed: {e}", schedule.id);
                    }
                }
            }
        }

        if sent_count > 0 {
            info!("notification sweep finished: {sent_count} mail(s) sent");
        }
        Ok(sent_count)
    }

    async fn send_schedule_notification(
        &self,
        schedule: &Schedule,
        kind: NotificationKind,
    ) -> anyhow::Result<bool> {
        let recipients = self.notification_recipients(schedule).await;
        if recipients.is_empty() {
            warn!("schedule #{}: no notification recipients", schedule.id);
            return Ok(false);
        }

        let customer_name = match schedule.customer_id {
            Some(id) => self.customer_repository.get_by_id(id).await.ok().map(|c| c.name),
            None => None,
        };
        let property_name = match schedule.property_id {
            Some(id) => self.property_repository.get_by_id(id).await.ok().map(|p| p.name),
            None => None,
        };

        let content = notification_content(
            schedule,
            kind,
            customer_name.as_deref(),
            property_name.as_deref(),
        );

        match self.mail_service.send(&recipients, &content).await {
            Ok(()) => Ok(true),
            Err(e) => {
                error!("schedule #{}: mail send failed: {e}", schedule.id);
                Ok(false)
            }
        }
    }
}

impl NotificationServiceImpl {
    /// 送信先はスケジュール作成者と関連顧客。重複を除き、体裁の怪しい
    /// アドレスは落とす
    async fn notification_recipients(&self, schedule: &Schedule) -> Vec<String> {
        let mut recipients = BTreeSet::new();

        if let Some(user_id) = schedule.created_by {
            match self.user_repository.get_by_id(user_id).await {
                Ok(user) => {
                    if let Some(email) = user.email {
                        recipients.insert(email);
                    }
                }
                Err(e) => warn!("schedule #{}: creator lookup failed: {e}", schedule.id),
            }
        }

        if let Some(customer_id) = schedule.customer_id {
            match self.customer_repository.get_by_id(customer_id).await {
                Ok(customer) => {
                    if let Some(email) = customer.email {
                        recipients.insert(email);
                    }
                }
                Err(e) => warn!("schedule #{}: customer lookup failed: {e}", schedule.id),
            }
        }

        recipients.into_iter().filter(|address| address.contains('@')).collect()
    }
}

/// 通知メールの件名と本文を組み立てる
pub(crate) fn notification_content(
    schedule: &Schedule,
    kind: NotificationKind,
    customer_name: Option<&str>,
    property_name: Option<&str>,
) -> MailContent {
    let start = schedule.start_datetime.format("%Y年%m月%d日 %H:%M").to_string();
    let end = schedule.end_datetime.format("%Y年%m月%d日 %H:%M").to_string();

    let (subject, message_title, message_body) = match kind {
        NotificationKind::Reminder => (
            format!("【リマインダー】{} - {start}", schedule.title),
            "スケジュールリマインダー",
            format!(
                "以下のスケジュールが {} 分後に開始予定です。",
                schedule.notification_minutes
            ),
        ),
        NotificationKind::Start => (
            format!("【開始通知】{} - {start}", schedule.title),
            "スケジュール開始通知",
            "以下のスケジュールが開始時刻になりました。".to_string(),
        ),
        NotificationKind::Complete => (
            format!("【完了通知】{} - 完了", schedule.title),
            "スケジュール完了通知",
            "以下のスケジュールが完了しました。".to_string(),
        ),
    };

    let mut customer_info = String::new();
    if let Some(customer) = customer_name {
        customer_info.push_str(&format!("お客様: {customer}"));
        if let Some(property) = property_name {
            customer_info.push_str(&format!("\n物件: {property}"));
        }
    }

    let description_html = schedule
        .description
        .as_deref()
        .map(|description| format!("<p><strong>説明:</strong> {description}</p>"))
        .unwrap_or_default();
    let customer_html = if customer_info.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", customer_info.replace('\n', "<br>"))
    };

    let html_body = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: 'Segoe UI', Arial, sans-serif; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #007bff; color: white; padding: 20px; text-align: center; }}
    .content {{ background: #f8f9fa; padding: 20px; }}
    .schedule-info {{ background: white; padding: 15px; border-left: 4px solid #007bff; margin: 10px 0; }}
    .footer {{ text-align: center; padding: 20px; color: #6c757d; font-size: 14px; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header"><h1>{message_title}</h1></div>
    <div class="content">
      <p>{message_body}</p>
      <div class="schedule-info">
        <h3>{title}</h3>
        <p><strong>開始:</strong> {start}</p>
        <p><strong>終了:</strong> {end}</p>
        {description_html}
        {customer_html}
      </div>
    </div>
    <div class="footer">
      <p>エアコンクリーニング完了報告書システム</p>
      <p>このメールは自動送信されています。</p>
    </div>
  </div>
</body>
</html>"#,
        title = schedule.title,
    );

    let description_text = schedule
        .description
        .as_deref()
        .map(|description| format!("- 説明: {description}\n"))
        .unwrap_or_default();
    let customer_text = if customer_info.is_empty() {
        String::new()
    } else {
        format!("- {customer_info}\n")
    };

    let text_body = format!(
        "{message_title}\n\n{message_body}\n\nスケジュール詳細:\n- タイトル: {}\n- 開始: {start}\n- 終了: {end}\n{description_text}{customer_text}\n---\nエアコンクリーニング完了報告書システム\nこのメールは自動送信されています。\n",
        schedule.title,
    );

    MailContent {
        subject,
        html_body,
        text_body,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use domain_crm::{
        mock::{MockCustomerRepo, MockPropertyRepo, MockUserRepo},
        model::entity::{Customer, User},
    };
    use domain_schedule::mock::{MockMailService, MockScheduleRepo};

    use super::*;

    fn service_with(
        schedule_repo: MockScheduleRepo,
        customer_repo: MockCustomerRepo,
        user_repo: MockUserRepo,
        mail: MockMailService,
    ) -> NotificationServiceImpl {
        NotificationServiceImpl::builder()
            .schedule_repository(Arc::new(schedule_repo))
            .customer_repository(Arc::new(customer_repo))
            .property_repository(Arc::new(MockPropertyRepo::new()))
            .user_repository(Arc::new(user_repo))
            .mail_service(Arc::new(mail))
            .build()
    }

    fn due_reminder_schedule() -> Schedule {
        // 開始が通知 30 分前ぴったりに来るスケジュール
        let start = Local::now().naive_local() + Duration::minutes(30);
        Schedule {
            id: 5,
            title: "作業: 田中 - 田中様邸".to_string(),
            start_datetime: start,
            end_datetime: start + Duration::hours(3),
            notification_enabled: true,
            notification_minutes: 30,
            customer_id: Some(3),
            created_by: Some(1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn unconfigured_mail_short_circuits_the_sweep() {
        let mut mail = MockMailService::new();
        mail.expect_is_configured().return_const(false);
        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo.expect_get_pending_notifiable().times(0);

        let service = service_with(
            schedule_repo,
            MockCustomerRepo::new(),
            MockUserRepo::new(),
            mail,
        );
        assert_eq!(service.check_and_send().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reminder_is_sent_to_deduplicated_recipients() {
        let mut mail = MockMailService::new();
        mail.expect_is_configured().return_const(true);
        mail.expect_send()
            .withf(|to, content| {
                to == ["tanaka@example.com", "ueda@example.com"]
                    && content.subject.starts_with("【リマインダー】")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo
            .expect_get_pending_notifiable()
            .returning(|| Ok(vec![due_reminder_schedule()]));

        let mut customer_repo = MockCustomerRepo::new();
        customer_repo.expect_get_by_id().returning(|_| {
            Ok(Customer {
                id: 3,
                name: "田中".to_string(),
                email: Some("tanaka@example.com".to_string()),
                ..Default::default()
            })
        });
        let mut user_repo = MockUserRepo::new();
        user_repo.expect_get_by_id().returning(|_| {
            Ok(User {
                id: 1,
                email: Some("ueda@example.com".to_string()),
                ..Default::default()
            })
        });

        let service = service_with(schedule_repo, customer_repo, user_repo, mail);
        assert_eq!(service.check_and_send().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn send_failures_do_not_stop_the_sweep() {
        let mut mail = MockMailService::new();
        mail.expect_is_configured().return_const(true);
        mail.expect_send().returning(|_, _| Err(anyhow::anyhow!("smtp down")));

        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo.expect_get_pending_notifiable().returning(|| {
            Ok(vec![due_reminder_schedule(), due_reminder_schedule()])
        });
        let mut customer_repo = MockCustomerRepo::new();
        customer_repo.expect_get_by_id().returning(|_| {
            Ok(Customer {
                email: Some("tanaka@example.com".to_string()),
                ..Default::default()
            })
        });
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(|_| Err(anyhow::anyhow!("no such user")));

        let service = service_with(schedule_repo, customer_repo, user_repo, mail);
        // どちらも送信失敗だが sweep 自体は成功し 0 件
        assert_eq!(service.check_and_send().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn schedules_without_recipients_are_skipped() {
        let mut mail = MockMailService::new();
        mail.expect_is_configured().return_const(true);
        mail.expect_send().times(0);

        let mut schedule = due_reminder_schedule();
        schedule.customer_id = None;
        schedule.created_by = None;

        let mut schedule_repo = MockScheduleRepo::new();
        schedule_repo
            .expect_get_pending_notifiable()
            .returning(move || Ok(vec![schedule.clone()]));

        let service = service_with(
            schedule_repo,
            MockCustomerRepo::new(),
            MockUserRepo::new(),
            mail,
        );
        assert_eq!(service.check_and_send().await.unwrap(), 0);
    }

    #[test]
    fn content_varies_by_notification_kind() {
        let schedule = due_reminder_schedule();

        let reminder =
            notification_content(&schedule, NotificationKind::Reminder, Some("田中"), None);
        assert!(reminder.subject.starts_with("【リマインダー】"));
        assert!(reminder.text_body.contains("30 分後に開始予定"));
        assert!(reminder.html_body.contains("お客様: 田中"));

        let start = notification_content(&schedule, NotificationKind::Start, None, None);
        assert!(start.subject.starts_with("【開始通知】"));
        assert!(!start.html_body.contains("お客様"));

        let complete = notification_content(&schedule, NotificationKind::Complete, None, None);
        assert!(complete.subject.ends_with("- 完了"));
    }
}
