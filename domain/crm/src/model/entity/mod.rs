mod air_conditioner;
mod customer;
mod property;
mod user;
mod work_item;

#[rustfmt::skip]
pub use {
    air_conditioner::AirConditioner,
    customer::Customer,
    property::Property,
    user::User,
    work_item::WorkItem,
};
