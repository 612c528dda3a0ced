//! 提交门
//!
//! 把答题卡收束为一次批量提交：过滤已作答题目、拒绝空提交、
//! 保证同一会话至多一次提交成立（Idle → InFlight → Done）。
//! 失败回落 Idle，答题卡与幂等键保持原样，允许手动重提

use crate::error::{AppError, AppResult, QuizError};
use crate::models::question::Question;
use crate::models::submission::{AnswerEntry, SubmissionRequest};
use crate::workflow::answer_sheet::AnswerSheet;
use crate::workflow::quiz_ctx::QuizCtx;

/// 提交门状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    /// 尚未提交
    Idle,
    /// 有一次提交在途
    InFlight,
    /// 已成功提交，本测验视为"已作答"
    Done,
}

/// 提交门
#[derive(Debug)]
pub struct SubmissionGate {
    state: GateState,
}

impl SubmissionGate {
    /// 创建新的提交门
    pub fn new() -> Self {
        Self {
            state: GateState::Idle,
        }
    }

    /// 构造批量提交载荷（纯函数）
    ///
    /// # 参数
    /// - `ctx`: 答题上下文
    /// - `questions`: 题目列表（决定载荷顺序）
    /// - `sheet`: 答题卡
    ///
    /// # 返回
    /// 每个已作答题目恰好一条，未作答题目零条；零作答时报错
    pub fn build_payload(
        ctx: &QuizCtx,
        questions: &[Question],
        sheet: &AnswerSheet,
    ) -> AppResult<SubmissionRequest> {
        let submissions: Vec<AnswerEntry> = questions
            .iter()
            .filter_map(|question| {
                sheet.answer_for(question.id).map(|answer| AnswerEntry {
                    question_id: question.id,
                    answer,
                })
            })
            .collect();

        if submissions.is_empty() {
            return Err(AppError::Quiz(QuizError::NothingAnswered));
        }

        Ok(SubmissionRequest {
            test_id: ctx.quiz_id,
            submission_key: ctx.submission_key.clone(),
            submissions,
        })
    }

    /// 开启一次提交：校验门状态并构造载荷
    ///
    /// Idle 才放行；载荷构造失败（零作答）时门保持 Idle，不计一次尝试
    pub fn begin(
        &mut self,
        ctx: &QuizCtx,
        questions: &[Question],
        sheet: &AnswerSheet,
    ) -> AppResult<SubmissionRequest> {
        match self.state {
            GateState::InFlight => return Err(AppError::Quiz(QuizError::SubmissionInFlight)),
            GateState::Done => return Err(AppError::Quiz(QuizError::AlreadySubmitted)),
            GateState::Idle => {}
        }

        let payload = Self::build_payload(ctx, questions, sheet)?;
        self.state = GateState::InFlight;
        Ok(payload)
    }

    /// 提交成功，封门防重入
    pub fn complete(&mut self) {
        self.state = GateState::Done;
    }

    /// 提交失败，回到可重提状态
    pub fn fail(&mut self) {
        if self.state == GateState::InFlight {
            self.state = GateState::Idle;
        }
    }

    /// 本测验是否已成功提交
    pub fn is_done(&self) -> bool {
        self.state == GateState::Done
    }

    /// 是否有提交在途
    pub fn is_in_flight(&self) -> bool {
        self.state == GateState::InFlight
    }
}

impl Default for SubmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::course::QuizDef;
    use crate::models::question::OptionLabel;
    use serde_json::json;

    fn ctx() -> QuizCtx {
        QuizCtx::new(
            1,
            &QuizDef {
                id: 5,
                titre: "测验".to_string(),
                cours_id: 1,
                duree: 10,
            },
        )
    }

    fn question(id: u32) -> Question {
        Question {
            id,
            stem: format!("第 {} 题", id),
            options: [
                "甲".to_string(),
                "乙".to_string(),
                "丙".to_string(),
                "丁".to_string(),
            ],
            quiz_id: 5,
        }
    }

    #[test]
    fn payload_contains_only_answered_questions() {
        let questions = vec![question(1), question(2), question(3)];
        let mut sheet = AnswerSheet::new();
        sheet.select(1, OptionLabel::A);
        sheet.select(3, OptionLabel::B);

        let payload = SubmissionGate::build_payload(&ctx(), &questions, &sheet).expect("构造失败");

        assert_eq!(payload.submissions.len(), 2);
        assert_eq!(payload.submissions[0].question_id, 1);
        assert_eq!(payload.submissions[1].question_id, 3);
    }

    #[test]
    fn two_question_session_produces_exact_wire_payload() {
        let ctx = ctx();
        let questions = vec![question(1), question(2)];
        let mut sheet = AnswerSheet::new();
        sheet.select(1, OptionLabel::A);
        sheet.select(2, OptionLabel::C);

        let payload =
            SubmissionGate::build_payload(&ctx, &questions, &sheet).expect("构造失败");
        let value = serde_json::to_value(&payload.submissions).expect("序列化失败");

        assert_eq!(
            value,
            json!([
                { "quizId": 1, "answer": "a" },
                { "quizId": 2, "answer": "c" }
            ])
        );
        assert_eq!(payload.test_id, 5);
        assert_eq!(payload.submission_key, ctx.submission_key);
    }

    #[test]
    fn empty_sheet_is_rejected_and_gate_stays_open() {
        let questions = vec![question(1)];
        let sheet = AnswerSheet::new();
        let mut gate = SubmissionGate::new();

        let err = gate.begin(&ctx(), &questions, &sheet).unwrap_err();
        assert!(matches!(err, AppError::Quiz(QuizError::NothingAnswered)));
        // 零作答不算一次尝试，门保持 Idle
        assert!(!gate.is_in_flight());
        assert!(!gate.is_done());
    }

    #[test]
    fn at_most_one_submission_per_session() {
        let ctx = ctx();
        let questions = vec![question(1)];
        let mut sheet = AnswerSheet::new();
        sheet.select(1, OptionLabel::A);
        let mut gate = SubmissionGate::new();

        gate.begin(&ctx, &questions, &sheet).expect("首次应放行");
        // 在途时再触发（双击）被硬性拒绝
        let err = gate.begin(&ctx, &questions, &sheet).unwrap_err();
        assert!(matches!(err, AppError::Quiz(QuizError::SubmissionInFlight)));

        gate.complete();
        let err = gate.begin(&ctx, &questions, &sheet).unwrap_err();
        assert!(matches!(err, AppError::Quiz(QuizError::AlreadySubmitted)));
        assert!(gate.is_done());
    }

    #[test]
    fn failure_reopens_gate_with_same_key() {
        let ctx = ctx();
        let questions = vec![question(1)];
        let mut sheet = AnswerSheet::new();
        sheet.select(1, OptionLabel::A);
        let mut gate = SubmissionGate::new();

        let first = gate.begin(&ctx, &questions, &sheet).expect("首次应放行");
        gate.fail();

        // 答题卡保留，手动重提复用同一幂等键
        let second = gate.begin(&ctx, &questions, &sheet).expect("重提应放行");
        assert_eq!(first.submission_key, second.submission_key);
        assert_eq!(first.submissions, second.submissions);
    }
}
