use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// API 调用错误
    Api(ApiError),
    /// 认证/会话错误
    Auth(AuthError),
    /// 答题流程错误
    Quiz(QuizError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Auth(e) => write!(f, "认证错误: {}", e),
            AppError::Quiz(e) => write!(f, "答题错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Api(e) => Some(e),
            AppError::Auth(e) => Some(e),
            AppError::Quiz(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回非成功状态码
    BadStatus {
        endpoint: String,
        status: u16,
    },
    /// 评分服务拒绝了提交（错误文案原样保留）
    GradingRejected {
        message: String,
    },
    /// API 返回空结果
    EmptyResponse {
        endpoint: String,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadStatus { endpoint, status } => {
                write!(f, "API返回错误状态 ({}): HTTP {}", endpoint, status)
            }
            ApiError::GradingRejected { message } => {
                // 服务端文案原样透传
                write!(f, "{}", message)
            }
            ApiError::EmptyResponse { endpoint } => {
                write!(f, "API返回空结果: {}", endpoint)
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. } | ApiError::JsonParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 认证/会话错误
#[derive(Debug)]
pub enum AuthError {
    /// 尚未登录
    NotLoggedIn,
    /// 令牌已过期
    TokenExpired,
    /// 服务端拒绝（401），会话应被废弃
    Unauthorized {
        endpoint: String,
    },
    /// 邮箱格式不合法（本地校验，不发请求）
    InvalidEmail {
        email: String,
    },
    /// 服务端返回了无法识别的角色
    UnknownRole {
        role: String,
    },
    /// 角色不符，无权访问
    Forbidden {
        required: String,
        actual: String,
    },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotLoggedIn => write!(f, "尚未登录"),
            AuthError::TokenExpired => write!(f, "登录令牌已过期，请重新登录"),
            AuthError::Unauthorized { endpoint } => {
                write!(f, "登录状态失效 ({}): 请重新登录", endpoint)
            }
            AuthError::InvalidEmail { email } => {
                write!(f, "邮箱格式不合法: {}", email)
            }
            AuthError::UnknownRole { role } => {
                write!(f, "无法识别的用户角色: {}", role)
            }
            AuthError::Forbidden { required, actual } => {
                write!(f, "没有访问权限: 需要{}，当前为{}", required, actual)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// 答题流程错误
#[derive(Debug)]
pub enum QuizError {
    /// 课程没有挂接测验
    NoTestForCourse {
        course_id: u32,
    },
    /// 测验题目为空（视同加载失败，禁用答题入口）
    NoQuestions {
        quiz_id: u32,
    },
    /// 当前题未作答，禁止前进
    CurrentUnanswered {
        index: usize,
    },
    /// 零题作答，拒绝提交
    NothingAnswered,
    /// 本测验已提交过，禁止重入
    AlreadySubmitted,
    /// 已有一次提交在途
    SubmissionInFlight,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoTestForCourse { course_id } => {
                write!(f, "课程 {} 没有挂接测验", course_id)
            }
            QuizError::NoQuestions { quiz_id } => {
                write!(f, "测验 {} 没有可用题目", quiz_id)
            }
            QuizError::CurrentUnanswered { index } => {
                write!(f, "第 {} 题尚未作答，请选择一个选项后再继续", index + 1)
            }
            QuizError::NothingAnswered => write!(f, "一题未答，无法提交"),
            QuizError::AlreadySubmitted => write!(f, "本测验已提交过，不能重复作答"),
            QuizError::SubmissionInFlight => write!(f, "正在提交中，请勿重复操作"),
        }
    }
}

impl std::error::Error for QuizError {}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 配置文件读取失败
    FileReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 配置文件解析失败
    FileParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
            ConfigError::FileReadFailed { path, source } => {
                write!(f, "读取配置文件失败 ({}): {}", path, source)
            }
            ConfigError::FileParseFailed { source } => {
                write!(f, "配置文件解析失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileReadFailed { source, .. }
            | ConfigError::FileParseFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| String::from("<unknown>"));
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(ConfigError::FileParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(ConfigError::FileReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建评分拒绝错误（保留服务端原文）
    pub fn grading_rejected(message: impl Into<String>) -> Self {
        AppError::Api(ApiError::GradingRejected {
            message: message.into(),
        })
    }

    /// 创建 401 会话失效错误
    pub fn unauthorized(endpoint: impl Into<String>) -> Self {
        AppError::Auth(AuthError::Unauthorized {
            endpoint: endpoint.into(),
        })
    }

    /// 创建未知角色错误
    pub fn unknown_role(role: impl Into<String>) -> Self {
        AppError::Auth(AuthError::UnknownRole { role: role.into() })
    }

    /// 判断是否为认证类错误（会话应被废弃）
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }

    /// 评分服务的业务拒绝文案（需原样呈现给用户）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Api(ApiError::GradingRejected { message }) => Some(message),
            _ => None,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_rejection_keeps_server_text_verbatim() {
        let err = AppError::grading_rejected("Test already taken");
        assert_eq!(err.server_message(), Some("Test already taken"));
        // Display 也不得替换为通用文案
        assert!(err.to_string().contains("Test already taken"));
    }

    #[test]
    fn only_grading_rejections_carry_a_server_message() {
        assert_eq!(AppError::unauthorized("/examen/submit").server_message(), None);
        assert_eq!(AppError::Other("x".to_string()).server_message(), None);
    }
}
