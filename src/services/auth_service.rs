//! 认证服务 - 业务能力层
//!
//! 职责：
//! - 登录/注册成功后把令牌写入会话上下文
//! - 把服务端角色串解析为 [`Role`]，未知角色直接报错
//! - 发请求前做本地邮箱格式校验

use std::sync::Arc;

use regex::Regex;
use tracing::info;

use crate::clients::AuthClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, AuthError};
use crate::models::user::{LoginRequest, RegisterRequest, Role};
use crate::session::SessionContext;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// 认证服务
pub struct AuthService {
    client: AuthClient,
    session: Arc<SessionContext>,
    email_re: Regex,
}

impl AuthService {
    /// 创建新的认证服务
    pub fn new(config: &Config, session: Arc<SessionContext>) -> AppResult<Self> {
        let email_re = Regex::new(EMAIL_PATTERN)
            .map_err(|e| AppError::Other(format!("邮箱正则编译失败: {}", e)))?;
        Ok(Self {
            client: AuthClient::new(config),
            session,
            email_re,
        })
    }

    /// 登录并建立会话
    ///
    /// # 参数
    /// - `email`: 登录邮箱
    /// - `password`: 密码
    ///
    /// # 返回
    /// 返回解析后的用户角色
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Role> {
        self.check_email(email)?;

        let response = self
            .client
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let role = Role::parse(&response.user.role)
            .ok_or_else(|| AppError::unknown_role(&response.user.role))?;

        self.session.store(response.token, response.user);
        info!("✓ 登录成功: {} ({})", email, role);

        Ok(role)
    }

    /// 注册并建立会话（注册即登录）
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<Role> {
        self.check_email(&request.email)?;

        let response = self.client.register(request).await?;

        let role = Role::parse(&response.user.role)
            .ok_or_else(|| AppError::unknown_role(&response.user.role))?;

        self.session.store(response.token, response.user);
        info!("✓ 注册成功: {} ({})", request.email, role);

        Ok(role)
    }

    /// 登出，清除会话
    pub fn logout(&self) {
        self.session.clear();
        info!("✓ 已登出");
    }

    /// 当前会话角色（未登录或过期返回 None）
    pub fn current_role(&self) -> Option<Role> {
        if self.session.is_expired() {
            return None;
        }
        self.session
            .current_user()
            .and_then(|user| Role::parse(&user.role))
    }

    /// 路由守卫谓词：要求已登录
    pub fn require_authenticated(&self) -> AppResult<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(AppError::Auth(AuthError::NotLoggedIn))
        }
    }

    /// 路由守卫谓词：要求已登录且为指定角色
    pub fn require_role(&self, role: Role) -> AppResult<()> {
        self.require_authenticated()?;
        match self.current_role() {
            Some(current) if current == role => Ok(()),
            Some(current) => Err(AppError::Auth(AuthError::Forbidden {
                required: role.name().to_string(),
                actual: current.name().to_string(),
            })),
            None => Err(AppError::Auth(AuthError::NotLoggedIn)),
        }
    }

    /// 邮箱格式本地校验
    pub fn email_ok(&self, email: &str) -> bool {
        self.email_re.is_match(email)
    }

    fn check_email(&self, email: &str) -> AppResult<()> {
        if self.email_ok(email) {
            Ok(())
        } else {
            Err(AppError::Auth(AuthError::InvalidEmail {
                email: email.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserInfo;

    fn service() -> (AuthService, Arc<SessionContext>) {
        let config = Config::default();
        let session = Arc::new(SessionContext::new(config.token_ttl_secs));
        let svc = AuthService::new(&config, session.clone()).expect("创建认证服务失败");
        (svc, session)
    }

    fn fake_login(session: &SessionContext, role: &str) {
        session.store(
            "jwt-abc".to_string(),
            UserInfo {
                id: 1,
                email: "e@example.com".to_string(),
                role: role.to_string(),
            },
        );
    }

    #[test]
    fn email_validation() {
        let (svc, _) = service();
        assert!(svc.email_ok("etudiant@example.com"));
        assert!(svc.email_ok("a.b@lms.fr"));
        assert!(!svc.email_ok("pas-un-email"));
        assert!(!svc.email_ok("a b@example.com"));
        assert!(!svc.email_ok("a@b"));
    }

    #[test]
    fn current_role_none_without_login() {
        let (svc, _) = service();
        assert_eq!(svc.current_role(), None);
    }

    #[test]
    fn guards_reject_before_login() {
        let (svc, _) = service();
        assert!(svc.require_authenticated().is_err());
        assert!(svc.require_role(Role::Student).is_err());
    }

    #[test]
    fn guards_check_role_after_login() {
        let (svc, session) = service();
        fake_login(&session, "etudiant");

        assert!(svc.require_authenticated().is_ok());
        assert!(svc.require_role(Role::Student).is_ok());
        assert!(svc.require_role(Role::Admin).is_err());
        assert_eq!(svc.current_role(), Some(Role::Student));

        svc.logout();
        assert!(svc.require_authenticated().is_err());
    }
}
