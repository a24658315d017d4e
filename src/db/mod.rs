pub mod repository;

pub use repository::{ScheduleRepo, open_read_only};
