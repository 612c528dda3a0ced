//! 答题卡
//!
//! 题目ID → 所选选项的纯内存映射，随答题会话存亡，不做任何持久化

use std::collections::HashMap;

use crate::models::question::OptionLabel;

/// 答题卡
///
/// 每题至多一条记录；未作答的题没有条目
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    chosen: HashMap<u32, OptionLabel>,
}

impl AnswerSheet {
    /// 创建空答题卡
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录某题的选择，覆盖旧值
    ///
    /// 同一选项重复选择与只选一次等价；改选不影响其他题
    pub fn select(&mut self, question_id: u32, label: OptionLabel) {
        self.chosen.insert(question_id, label);
    }

    /// 查询某题的选择
    pub fn answer_for(&self, question_id: u32) -> Option<OptionLabel> {
        self.chosen.get(&question_id).copied()
    }

    /// 某题是否已作答
    pub fn is_answered(&self, question_id: u32) -> bool {
        self.chosen.contains_key(&question_id)
    }

    /// 已作答题数
    pub fn answered_count(&self) -> usize {
        self.chosen.len()
    }

    /// 是否一题未答
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
