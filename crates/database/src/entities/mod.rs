pub mod course;
pub mod course_pre_post_req;
pub mod course_prereq;

pub use course as courses;
pub use course_pre_post_req as course_pre_post_reqs;
pub use course_prereq as course_prereqs;
