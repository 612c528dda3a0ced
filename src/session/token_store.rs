//! 会话上下文 - 基础设施层
//!
//! 进程内唯一的令牌持有者，只对外暴露能力（token / is_expired / clear）。
//! 业务逻辑一律经由本对象取令牌，不直接触碰任何存储。

use std::sync::RwLock;

use chrono::{DateTime, Duration, Local};
use thiserror::Error;

use crate::models::user::UserInfo;

/// 会话层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("尚未登录")]
    NotLoggedIn,
    #[error("登录令牌已过期")]
    Expired,
}

/// 登录态
#[derive(Debug, Clone)]
struct TokenState {
    token: String,
    user: UserInfo,
    issued_at: DateTime<Local>,
}

/// 会话上下文
///
/// 生命周期：登录时写入，登出/401 时清除，读取时检查过期
pub struct SessionContext {
    inner: RwLock<Option<TokenState>>,
    ttl: Duration,
}

impl SessionContext {
    /// 创建新的会话上下文
    ///
    /// # 参数
    /// - `ttl_secs`: 令牌有效期（秒）
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            inner: RwLock::new(None),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// 写入登录态（登录/注册成功后调用）
    pub fn store(&self, token: String, user: UserInfo) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(TokenState {
            token,
            user,
            issued_at: Local::now(),
        });
    }

    /// 取令牌；未登录或已过期均返回错误
    pub fn token(&self) -> Result<String, SessionError> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            None => Err(SessionError::NotLoggedIn),
            Some(state) if self.expired(state) => Err(SessionError::Expired),
            Some(state) => Ok(state.token.clone()),
        }
    }

    /// 令牌是否已过期（未登录视为过期）
    pub fn is_expired(&self) -> bool {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            None => true,
            Some(state) => self.expired(state),
        }
    }

    /// 是否持有未过期的令牌
    pub fn is_authenticated(&self) -> bool {
        !self.is_expired()
    }

    /// 清除登录态（登出或服务端 401）
    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// 当前登录用户
    pub fn current_user(&self) -> Option<UserInfo> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|state| state.user.clone())
    }

    fn expired(&self, state: &TokenState) -> bool {
        Local::now() - state.issued_at >= self.ttl
    }
}
