//! 答题流程 - 流程层
//!
//! 核心职责：定义"一次测验会话"的完整流程
//!
//! 流程顺序：
//! 1. 持有已加载的有序题目（加载失败根本不会进入本层）
//! 2. 选择选项 → 前进/后退（前进受"当前题已作答"门禁约束）
//! 3. 末题前进 → 提交门收束为一次批量提交
//! 4. 成绩交给展示器渲染

use tracing::{error, info, warn};

use crate::clients::GradingClient;
use crate::error::{AppResult, QuizError};
use crate::models::question::{OptionLabel, Question};
use crate::models::submission::{SubmissionRequest, TestResult};
use crate::services::ResultPresenter;
use crate::utils::logging::truncate_text;
use crate::workflow::answer_sheet::AnswerSheet;
use crate::workflow::navigator::{Advance, Navigator};
use crate::workflow::quiz_ctx::QuizCtx;
use crate::workflow::submission_gate::SubmissionGate;

/// 答题流程
///
/// - 编排答题卡、导航器、提交门与成绩展示器
/// - 不持有任何网络资源，提交时借用评分客户端
pub struct QuizFlow {
    ctx: QuizCtx,
    questions: Vec<Question>,
    sheet: AnswerSheet,
    navigator: Navigator,
    gate: SubmissionGate,
    presenter: ResultPresenter,
    result: Option<TestResult>,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 创建新的答题流程
    ///
    /// # 参数
    /// - `ctx`: 答题上下文
    /// - `questions`: 有序题目列表（调用方保证非空）
    pub fn new(ctx: QuizCtx, questions: Vec<Question>, verbose_logging: bool) -> Self {
        let navigator = Navigator::new(questions.len());
        Self {
            ctx,
            questions,
            sheet: AnswerSheet::new(),
            navigator,
            gate: SubmissionGate::new(),
            presenter: ResultPresenter::new(),
            result: None,
            verbose_logging,
        }
    }

    /// 当前题
    pub fn current_question(&self) -> &Question {
        &self.questions[self.navigator.index()]
    }

    /// 当前题下标
    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    /// 题目总数
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// 已作答题数
    pub fn answered_count(&self) -> usize {
        self.sheet.answered_count()
    }

    /// 为当前题记录选择（覆盖旧值）
    pub fn select_current(&mut self, label: OptionLabel) {
        let question = &self.questions[self.navigator.index()];
        self.sheet.select(question.id, label);

        if self.verbose_logging {
            info!(
                "{} 题 {} 选择 {}: {}",
                self.ctx,
                self.navigator.index() + 1,
                label,
                truncate_text(question.option_text(label), 40)
            );
        }
    }

    /// 当前题是否已作答
    pub fn current_answered(&self) -> bool {
        self.sheet.is_answered(self.current_question().id)
    }

    /// 当前题已记录的选择
    pub fn current_answer(&self) -> Option<OptionLabel> {
        self.sheet.answer_for(self.current_question().id)
    }

    /// 尝试前进
    ///
    /// 当前题未作答时原地拒绝并给出行内警告；末题时返回提交信号
    pub fn next(&mut self) -> Advance {
        let answered = self.current_answered();
        let outcome = self.navigator.advance(answered);

        if outcome == Advance::Blocked {
            warn!(
                "{} ⚠️ {}",
                self.ctx,
                QuizError::CurrentUnanswered {
                    index: self.navigator.index()
                }
            );
        }

        outcome
    }

    /// 后退；首题时返回 false
    pub fn previous(&mut self) -> bool {
        self.navigator.retreat()
    }

    /// 校验并取出本会话的提交载荷（恰好成功一次）
    pub fn prepare_submission(&mut self) -> AppResult<SubmissionRequest> {
        self.gate.begin(&self.ctx, &self.questions, &self.sheet)
    }

    /// 提交整卷并记录成绩
    ///
    /// # 参数
    /// - `grader`: 评分客户端
    ///
    /// # 返回
    /// 成功返回成绩；失败时门重新打开、答题卡保留，可手动重提
    pub async fn submit(&mut self, grader: &GradingClient) -> AppResult<TestResult> {
        let payload = self.prepare_submission()?;

        info!(
            "{} 📤 正在提交答卷（{} 题已作答）...",
            self.ctx,
            payload.submissions.len()
        );

        match grader.submit_test(&payload).await {
            Ok(result) => {
                self.gate.complete();
                self.result = Some(result);
                self.presenter.announce(&result);
                Ok(result)
            }
            Err(e) => {
                self.gate.fail();
                error!("{} ❌ 提交失败: {}", self.ctx, e);
                Err(e)
            }
        }
    }

    /// 本测验是否已成功提交（仪表盘据此阻止重入）
    pub fn is_taken(&self) -> bool {
        self.gate.is_done()
    }

    /// 已收到的成绩
    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }

    /// 渲染成绩文本（未提交时为 None）
    pub fn render_result(&self) -> Option<String> {
        self.result.as_ref().map(|r| self.presenter.render(r))
    }
}
