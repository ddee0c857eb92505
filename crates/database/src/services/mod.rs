pub mod course;
pub mod requisite;

pub use course::CourseService;
pub use requisite::RequisiteService;
