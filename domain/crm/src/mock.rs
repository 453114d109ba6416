use async_trait::async_trait;
use mockall::mock;

use crate::{
    model::entity::{AirConditioner, Customer, Property, User, WorkItem},
    repository::{AirConditionerRepo, CustomerRepo, PropertyRepo, UserRepo, WorkItemRepo},
};

mock! {
    pub CustomerRepo {}
    #[async_trait]
    impl CustomerRepo for CustomerRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Customer>;
        async fn get_all(&self) -> anyhow::Result<Vec<Customer>>;
        async fn insert(&self, entity: &Customer) -> anyhow::Result<i32>;
    }
}

mock! {
    pub PropertyRepo {}
    #[async_trait]
    impl PropertyRepo for PropertyRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Property>;
        async fn get_by_customer_id(&self, customer_id: i32) -> anyhow::Result<Vec<Property>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Property>>;
        async fn insert(&self, entity: &Property) -> anyhow::Result<i32>;
    }
}

mock! {
    pub AirConditionerRepo {}
    #[async_trait]
    impl AirConditionerRepo for AirConditionerRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<AirConditioner>;
        async fn get_by_property_id(&self, property_id: i32) -> anyhow::Result<Vec<AirConditioner>>;
        async fn get_all(&self) -> anyhow::Result<Vec<AirConditioner>>;
        async fn insert(&self, entity: &AirConditioner) -> anyhow::Result<i32>;
    }
}

mock! {
    pub WorkItemRepo {}
    #[async_trait]
    impl WorkItemRepo for WorkItemRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<WorkItem>;
        async fn get_all_active(&self) -> anyhow::Result<Vec<WorkItem>>;
        async fn get_all(&self) -> anyhow::Result<Vec<WorkItem>>;
        async fn insert(&self, entity: &WorkItem) -> anyhow::Result<i32>;
    }
}

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<User>;
        async fn get_all(&self) -> anyhow::Result<Vec<User>>;
        async fn insert(&self, entity: &User) -> anyhow::Result<i32>;
    }
}
