mod orm;

pub use orm::OrmRepo;

use database_model::system::prelude::*;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::info;

/// データベース接続の共有ハンドル
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let connection = sea_orm::Database::connect(url).await?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// エンティティ定義からテーブルを作成する（存在すればそのまま）
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let mut statements = vec![
            schema.create_table_from_entity(CustomerEntity),
            schema.create_table_from_entity(PropertyEntity),
            schema.create_table_from_entity(AirConditionerEntity),
            schema.create_table_from_entity(WorkItemEntity),
            schema.create_table_from_entity(UserEntity),
            schema.create_table_from_entity(ReportEntity),
            schema.create_table_from_entity(WorkTimeEntity),
            schema.create_table_from_entity(WorkDetailEntity),
            schema.create_table_from_entity(PhotoEntity),
            schema.create_table_from_entity(ScheduleEntity),
        ];
        for statement in statements.iter_mut() {
            statement.if_not_exists();
            self.connection.execute(backend.build(&*statement)).await?;
        }

        info!("database schema is ready");
        Ok(())
    }
}
