/// 课程内容 API 客户端
///
/// 封装课程、测验定义与题目的只读调用；题目列表不含正确答案，
/// 顺序由服务端决定并原样保留
use std::sync::Arc;

use tracing::debug;

use crate::clients::{ensure_status, with_bearer};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::course::{Course, QuizDef};
use crate::models::question::Question;
use crate::session::SessionContext;

/// 课程内容 API 客户端
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl ContentClient {
    /// 创建新的内容客户端
    pub fn new(config: &Config, session: Arc<SessionContext>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    /// 获取全部课程
    pub async fn list_courses(&self) -> AppResult<Vec<Course>> {
        let endpoint = format!("{}/cours", self.base_url);
        let req = with_bearer(self.http.get(&endpoint), &self.session);
        let resp = ensure_status(req.send().await?, &endpoint)?;
        Ok(resp.json::<Vec<Course>>().await?)
    }

    /// 获取单个课程
    ///
    /// # 参数
    /// - `course_id`: 课程ID
    pub async fn get_course(&self, course_id: u32) -> AppResult<Course> {
        let endpoint = format!("{}/cours/{}", self.base_url, course_id);
        let req = with_bearer(self.http.get(&endpoint), &self.session);
        let resp = ensure_status(req.send().await?, &endpoint)?;
        Ok(resp.json::<Course>().await?)
    }

    /// 获取全部测验定义
    pub async fn list_quizzes(&self) -> AppResult<Vec<QuizDef>> {
        let endpoint = format!("{}/quiz", self.base_url);
        let req = with_bearer(self.http.get(&endpoint), &self.session);
        let resp = ensure_status(req.send().await?, &endpoint)?;
        Ok(resp.json::<Vec<QuizDef>>().await?)
    }

    /// 获取某个测验的有序题目列表
    ///
    /// # 参数
    /// - `quiz_id`: 测验ID
    ///
    /// # 返回
    /// 服务端顺序原样返回，不在客户端重排
    pub async fn questions_by_quiz(&self, quiz_id: u32) -> AppResult<Vec<Question>> {
        let endpoint = format!("{}/question/{}", self.base_url, quiz_id);
        let req = with_bearer(self.http.get(&endpoint), &self.session);
        let resp = ensure_status(req.send().await?, &endpoint)?;

        let questions = resp.json::<Vec<Question>>().await?;
        debug!("测验 {} 拉取到 {} 道题", quiz_id, questions.len());

        Ok(questions)
    }
}
