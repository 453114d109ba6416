mod schedule;

pub use schedule::ScheduleRepo;
