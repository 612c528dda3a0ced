pub mod course;
pub mod question;
pub mod submission;
pub mod user;

pub use course::{Course, QuizDef};
pub use question::{OptionLabel, Question, OPTION_COUNT};
pub use submission::{AnswerEntry, GradingResponse, SubmissionRequest, TestResult};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, Role, UserInfo};
