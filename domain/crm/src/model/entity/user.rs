use chrono::NaiveDateTime;
use database_model::system::user;
use serde::{Deserialize, Serialize};

/// # ユーザー
///
/// 認証自体はアプリ層の関心。ここでは通知の宛先解決と
/// スケジュールの作成者参照のために保持する。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    /// admin, user, viewer
    pub role: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<User> for user::Model {
    fn from(entity: User) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role: entity.role,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
