use serde::{Deserialize, Serialize};

/// 用户角色
///
/// 带标签枚举替代字符串比较；未知角色串解析为 None，不做静默落空
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// 学生
    Student,
    /// 教师
    Teacher,
    /// 管理员
    Admin,
}

impl Role {
    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Role::Student => "学生",
            Role::Teacher => "教师",
            Role::Admin => "管理员",
        }
    }

    /// 对应的仪表盘路由（穷尽分发表）
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Teacher => "/teacher/profile",
            Role::Admin => "/admin",
        }
    }

    /// 从服务端角色串解析（两套拼写都接受）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "etudiant" | "student" => Some(Role::Student),
            "enseignant" | "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 服务端返回的用户信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u32,
    pub email: String,
    /// 角色原文串，在服务层解析为 [`Role`]
    pub role: String,
}

/// 登录请求体
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 注册请求体
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub nom: String,
    pub prenom: String,
    pub role: String,
}

/// 认证服务响应
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}
