//! 答题上下文
//!
//! 封装"我在哪门课程的哪个测验上答题"这一信息

use std::fmt::Display;

use uuid::Uuid;

use crate::models::course::QuizDef;

/// 答题上下文
///
/// 包含一次答题会话所需的全部标识信息
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 课程ID
    pub course_id: u32,

    /// 测验ID
    pub quiz_id: u32,

    /// 测验标题（仅用于日志显示）
    pub quiz_title: String,

    /// 会话级提交幂等键，创建时生成一次，手动重提复用同一个
    pub submission_key: String,
}

impl QuizCtx {
    /// 创建新的答题上下文
    pub fn new(course_id: u32, quiz: &QuizDef) -> Self {
        Self {
            course_id,
            quiz_id: quiz.id,
            quiz_title: quiz.titre.clone(),
            submission_key: Uuid::new_v4().to_string(),
        }
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[课程#{} 测验#{}]", self.course_id, self.quiz_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> QuizDef {
        QuizDef {
            id: 9,
            titre: "期末小测".to_string(),
            cours_id: 1,
            duree: 30,
        }
    }

    #[test]
    fn each_session_gets_its_own_key() {
        let a = QuizCtx::new(1, &quiz());
        let b = QuizCtx::new(1, &quiz());
        assert!(!a.submission_key.is_empty());
        assert_ne!(a.submission_key, b.submission_key);
    }
}
