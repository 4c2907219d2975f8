pub mod course;
pub mod expected;
pub mod report;

pub use course::{CourseRecord, Grade};
pub use expected::{ExpectedGrades, ExpectedGradesError};
pub use report::{CategoryReport, ComparisonReport, CourseLine, CourseOutcome};
