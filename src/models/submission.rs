//! 提交与成绩的线格式模型
//!
//! 评分服务契约：
//! 请求 `{ testId, submissionKey, submissions: [{ quizId, answer }] }`
//! 响应 `{ result: { score, maxScore } }` 或 `{ error: "..." }`

use serde::{Deserialize, Serialize};

use crate::models::question::OptionLabel;

/// 单题答案条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// 题目ID（线格式沿用服务端的 quizId 命名）
    #[serde(rename = "quizId")]
    pub question_id: u32,

    /// 所选选项字母
    pub answer: OptionLabel,
}

/// 批量提交载荷，每个答题会话构造并发送一次
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    #[serde(rename = "testId")]
    pub test_id: u32,

    /// 会话级幂等键，服务端据此拒绝重复提交
    #[serde(rename = "submissionKey")]
    pub submission_key: String,

    pub submissions: Vec<AnswerEntry>,
}

/// 成绩，收到后不可变
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TestResult {
    pub score: u32,

    #[serde(rename = "maxScore")]
    pub max_score: u32,
}

/// 评分服务响应
#[derive(Debug, Clone, Deserialize)]
pub struct GradingResponse {
    pub result: Option<TestResult>,
    pub error: Option<String>,
}

/// 两个字段都缺失时的兜底文案
pub const GENERIC_GRADING_FAILURE: &str = "提交失败，评分服务未返回结果";

impl GradingResponse {
    /// 拆解响应：有成绩取成绩，有错误原文透传，否则回落通用文案
    pub fn into_outcome(self) -> Result<TestResult, String> {
        match (self.result, self.error) {
            (Some(result), _) => Ok(result),
            (None, Some(message)) => Err(message),
            (None, None) => Err(GENERIC_GRADING_FAILURE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_error_text_is_passed_through_verbatim() {
        let resp: GradingResponse =
            serde_json::from_value(json!({ "error": "Test already taken" })).expect("解析失败");
        assert_eq!(resp.into_outcome(), Err("Test already taken".to_string()));
    }

    #[test]
    fn missing_both_fields_falls_back_to_generic_message() {
        let resp: GradingResponse = serde_json::from_value(json!({})).expect("解析失败");
        assert_eq!(resp.into_outcome(), Err(GENERIC_GRADING_FAILURE.to_string()));
    }

    #[test]
    fn result_wins_when_present() {
        let resp: GradingResponse =
            serde_json::from_value(json!({ "result": { "score": 1, "maxScore": 2 } }))
                .expect("解析失败");
        assert_eq!(
            resp.into_outcome(),
            Ok(TestResult {
                score: 1,
                max_score: 2
            })
        );
    }

    #[test]
    fn submission_request_matches_wire_shape() {
        let req = SubmissionRequest {
            test_id: 5,
            submission_key: "k".to_string(),
            submissions: vec![AnswerEntry {
                question_id: 1,
                answer: OptionLabel::A,
            }],
        };
        let value = serde_json::to_value(&req).expect("序列化失败");
        assert_eq!(
            value,
            json!({
                "testId": 5,
                "submissionKey": "k",
                "submissions": [{ "quizId": 1, "answer": "a" }]
            })
        );
    }
}
