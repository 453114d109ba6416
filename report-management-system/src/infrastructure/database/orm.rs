use std::sync::Arc;

use typed_builder::TypedBuilder;

use super::Database;

/// sea-orm ベースのリポジトリ実装の共有ハンドル。
/// ドメインごとのリポジトリトレイトをこの 1 つの型に実装する
#[derive(TypedBuilder, Clone)]
pub struct OrmRepo {
    pub db: Arc<Database>,
}
