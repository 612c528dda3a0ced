use serde::{Deserialize, Serialize};

/// 课程元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub titre: String,
    pub description: String,
    pub enseignant_id: u32,
}

/// 测验定义（题目列表单独拉取）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDef {
    pub id: u32,
    pub titre: String,
    /// 挂接的课程ID
    pub cours_id: u32,
    /// 时长（分钟），仅展示用
    pub duree: u32,
}
