//! 成绩展示服务 - 业务能力层
//!
//! 只负责"渲染一份成绩"能力；无状态，重复渲染输出一致

use tracing::info;

use crate::models::submission::TestResult;

/// 成绩展示服务
pub struct ResultPresenter;

impl ResultPresenter {
    /// 创建新的成绩展示服务
    pub fn new() -> Self {
        Self
    }

    /// 渲染成绩文本
    ///
    /// # 参数
    /// - `result`: 服务端返回的成绩
    ///
    /// # 返回
    /// 同一成绩渲染任意多次输出相同
    pub fn render(&self, result: &TestResult) -> String {
        format!("得分 {} / {}", result.score, result.max_score)
    }

    /// 在日志中播报成绩
    pub fn announce(&self, result: &TestResult) {
        info!("{}", "=".repeat(60));
        info!("📊 测验完成: {}", self.render(result));
        info!("{}", "=".repeat(60));
    }
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_is_idempotent() {
        let presenter = ResultPresenter::new();
        let result = TestResult {
            score: 1,
            max_score: 2,
        };
        let first = presenter.render(&result);
        let second = presenter.render(&result);
        assert_eq!(first, "得分 1 / 2");
        assert_eq!(first, second);
    }
}
