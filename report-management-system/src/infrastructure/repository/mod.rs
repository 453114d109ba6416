mod air_conditioner;
mod customer;
mod photo;
mod property;
mod report;
mod schedule;
mod user;
mod work_detail;
mod work_item;
mod work_time;
