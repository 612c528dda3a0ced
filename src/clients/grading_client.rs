/// 评分 API 客户端
///
/// 只封装一个写端点：整卷批量提交。判分与答案核对完全在服务端
use std::sync::Arc;

use tracing::debug;

use crate::clients::{ensure_status, with_bearer};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::submission::{GradingResponse, SubmissionRequest, TestResult};
use crate::session::SessionContext;

/// 评分 API 客户端
pub struct GradingClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl GradingClient {
    /// 创建新的评分客户端
    pub fn new(config: &Config, session: Arc<SessionContext>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    /// 提交整卷答案
    ///
    /// # 参数
    /// - `request`: 批量提交载荷（测验ID + 幂等键 + 答案列表）
    ///
    /// # 返回
    /// 成功返回成绩；服务端业务拒绝（如重复作答）时错误文案原样透传
    pub async fn submit_test(&self, request: &SubmissionRequest) -> AppResult<TestResult> {
        let endpoint = format!("{}/examen/submit", self.base_url);

        debug!(
            "提交答卷 Payload: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let req = with_bearer(self.http.post(&endpoint).json(request), &self.session);
        let resp = ensure_status(req.send().await?, &endpoint)?;

        let grading = resp.json::<GradingResponse>().await?;

        debug!("提交答卷结果: {:?}", grading);

        grading.into_outcome().map_err(AppError::grading_rejected)
    }
}
