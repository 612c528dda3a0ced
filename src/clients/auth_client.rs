/// 认证 API 客户端
///
/// 封装登录与注册两个端点；令牌的保存由服务层完成
use tracing::debug;

use crate::clients::ensure_status;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest};

/// 认证 API 客户端
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// 创建新的认证客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// 登录
    ///
    /// # 参数
    /// - `request`: 邮箱与密码
    ///
    /// # 返回
    /// 返回令牌与用户信息
    pub async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        let endpoint = format!("{}/auth/login", self.base_url);
        debug!("登录请求: {}", request.email);

        let resp = self.http.post(&endpoint).json(request).send().await?;
        let resp = ensure_status(resp, &endpoint)?;

        Ok(resp.json::<AuthResponse>().await?)
    }

    /// 注册
    ///
    /// # 参数
    /// - `request`: 注册信息（邮箱、密码、姓名、角色）
    ///
    /// # 返回
    /// 返回令牌与用户信息（注册即登录）
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        let endpoint = format!("{}/auth/register", self.base_url);
        debug!("注册请求: {} ({})", request.email, request.role);

        let resp = self.http.post(&endpoint).json(request).send().await?;
        let resp = ensure_status(resp, &endpoint)?;

        Ok(resp.json::<AuthResponse>().await?)
    }
}
