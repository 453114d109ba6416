mod air_conditioner;
mod customer;
mod property;
mod user;
mod work_item;

#[rustfmt::skip]
pub use {
    air_conditioner::AirConditionerRepo,
    customer::CustomerRepo,
    property::PropertyRepo,
    user::UserRepo,
    work_item::WorkItemRepo,
};
