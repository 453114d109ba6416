pub mod photo;
pub mod report;
pub mod work_detail;
pub mod work_time;

#[rustfmt::skip]
pub use {
    photo::Photo,
    report::Report,
    work_detail::WorkDetail,
    work_time::WorkTime,
};
