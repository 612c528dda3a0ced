use serde::Deserialize;

use crate::error::AppResult;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 远端 API 基地址（认证/课程内容/评分共用一个网关）
    pub api_base_url: String,
    /// 登录邮箱
    pub account_email: String,
    /// 登录密码
    pub account_password: String,
    /// 目标课程ID
    pub course_id: u32,
    /// 令牌有效期（秒），超过视为过期
    pub token_ttl_secs: i64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            account_email: "etudiant@example.com".to_string(),
            account_password: "password123".to_string(),
            course_id: 1,
            token_ttl_secs: 3600,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::overlay_env(Self::default())
    }

    /// 从 TOML 配置文件加载，缺失项回落默认值，环境变量优先级最高
    pub fn from_file(path: &str) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let base: Config = toml::from_str(&text)?;
        Ok(Self::overlay_env(base))
    }

    fn overlay_env(base: Self) -> Self {
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(base.api_base_url),
            account_email: std::env::var("ACCOUNT_EMAIL").unwrap_or(base.account_email),
            account_password: std::env::var("ACCOUNT_PASSWORD").unwrap_or(base.account_password),
            course_id: std::env::var("COURSE_ID").ok().and_then(|v| v.parse().ok()).unwrap_or(base.course_id),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(base.token_ttl_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(base.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(base.output_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_partial_falls_back_to_default() {
        let cfg: Config = toml::from_str("course_id = 7\napi_base_url = \"http://lms.local\"")
            .expect("解析失败");
        assert_eq!(cfg.course_id, 7);
        assert_eq!(cfg.api_base_url, "http://lms.local");
        // 未给出的键回落默认值
        assert_eq!(cfg.token_ttl_secs, 3600);
    }
}
