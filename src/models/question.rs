//! 题目数据模型
//!
//! 课程内容服务返回的题目不包含正确答案，判分完全在服务端进行

use serde::{Deserialize, Serialize};

/// 每道题的选项数量（服务端契约固定为四个）
pub const OPTION_COUNT: usize = 4;

/// 选项标签
///
/// 与线格式中的 "a"/"b"/"c"/"d" 一一对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// 全部标签，按展示顺序
    pub const ALL: [OptionLabel; OPTION_COUNT] =
        [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    /// 获取线格式字母
    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "a",
            OptionLabel::B => "b",
            OptionLabel::C => "c",
            OptionLabel::D => "d",
        }
    }

    /// 标签在选项数组中的下标
    pub fn index(self) -> usize {
        match self {
            OptionLabel::A => 0,
            OptionLabel::B => 1,
            OptionLabel::C => 2,
            OptionLabel::D => 3,
        }
    }

    /// 从用户输入解析标签（大小写不敏感）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(OptionLabel::A),
            "b" => Some(OptionLabel::B),
            "c" => Some(OptionLabel::C),
            "d" => Some(OptionLabel::D),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 题目
///
/// 测验会话期间不可变；选项固定四个，非四个选项的载荷直接反序列化失败
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,

    /// 题干
    #[serde(rename = "question")]
    pub stem: String,

    /// 四个选项的展示文本，下标即 a/b/c/d
    pub options: [String; OPTION_COUNT],

    /// 所属测验ID
    pub quiz_id: u32,
}

impl Question {
    /// 获取某个标签对应的选项文本
    pub fn option_text(&self, label: OptionLabel) -> &str {
        &self.options[label.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 3,
            "question": "2 + 2 的结果是？",
            "options": ["3", "4", "5", "6"],
            "quiz_id": 9
        }"#
    }

    #[test]
    fn deserialize_question_with_four_options() {
        let q: Question = serde_json::from_str(sample_json()).expect("解析失败");
        assert_eq!(q.id, 3);
        assert_eq!(q.quiz_id, 9);
        assert_eq!(q.option_text(OptionLabel::B), "4");
    }

    #[test]
    fn reject_question_with_wrong_option_count() {
        let three = r#"{"id":1,"question":"x","options":["1","2","3"],"quiz_id":1}"#;
        assert!(serde_json::from_str::<Question>(three).is_err());
    }

    #[test]
    fn option_label_roundtrip() {
        for label in OptionLabel::ALL {
            assert_eq!(OptionLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(OptionLabel::parse("B "), Some(OptionLabel::B));
        assert_eq!(OptionLabel::parse("e"), None);
    }

    #[test]
    fn option_label_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OptionLabel::C).expect("序列化失败"),
            "\"c\""
        );
    }
}
