//! 题集加载服务 - 业务能力层
//!
//! 职责：由课程ID定位测验定义，再拉取其有序题目列表。
//! 任何一步失败都等同"无可用题目"：调用方禁用答题入口，不自动重试

use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::ContentClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, QuizError};
use crate::models::course::QuizDef;
use crate::models::question::Question;
use crate::session::SessionContext;

/// 加载完成的测验：定义 + 有序题目
#[derive(Debug, Clone)]
pub struct LoadedTest {
    pub quiz: QuizDef,
    pub questions: Vec<Question>,
}

/// 题集加载服务
pub struct QuizLoader {
    client: ContentClient,
}

impl QuizLoader {
    /// 创建新的题集加载服务
    pub fn new(config: &Config, session: Arc<SessionContext>) -> Self {
        Self {
            client: ContentClient::new(config, session),
        }
    }

    /// 加载某门课程挂接的测验及其题目
    ///
    /// # 参数
    /// - `course_id`: 课程ID
    ///
    /// # 返回
    /// 题目顺序为服务端返回顺序，原样保留
    pub async fn load_for_course(&self, course_id: u32) -> AppResult<LoadedTest> {
        info!("🔍 正在定位课程 {} 的测验...", course_id);

        let quiz = self
            .client
            .list_quizzes()
            .await?
            .into_iter()
            .find(|quiz| quiz.cours_id == course_id)
            .ok_or(AppError::Quiz(QuizError::NoTestForCourse { course_id }))?;

        info!("✓ 找到测验: {} (ID {})", quiz.titre, quiz.id);

        let questions = self.client.questions_by_quiz(quiz.id).await?;

        if questions.is_empty() {
            warn!("⚠️ 测验 {} 没有题目，禁用答题入口", quiz.id);
            return Err(AppError::Quiz(QuizError::NoQuestions { quiz_id: quiz.id }));
        }

        info!("✓ 题目加载完成，共 {} 道", questions.len());

        Ok(LoadedTest { quiz, questions })
    }
}
