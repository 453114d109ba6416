use async_trait::async_trait;

use crate::model::vo::MailContent;

/// メール送信
#[async_trait]
pub trait MailService: Send + Sync {
    /// 資格情報・差出人がそろっていて通知が有効か
    fn is_configured(&self) -> bool;

    async fn send(&self, to_addresses: &[String], content: &MailContent) -> anyhow::Result<()>;
}
