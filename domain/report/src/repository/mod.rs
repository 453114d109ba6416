mod photo;
mod report;
mod work_detail;
mod work_time;

#[rustfmt::skip]
pub use {
    photo::PhotoRepo,
    report::ReportRepo,
    work_detail::WorkDetailRepo,
    work_time::WorkTimeRepo,
};
