use serde::{Deserialize, Serialize};

/// 通知種別
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// 開始 N 分前のリマインダー
    Reminder,
    /// 開始時刻の通知
    Start,
    /// 完了通知（ディスパッチャは発火しない。手動送信用に残す）
    Complete,
}

/// 送信するメールの内容一式
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MailContent {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}
