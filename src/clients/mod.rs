//! API 客户端模块
//!
//! 负责所有与远端服务的 HTTP 交互；令牌注入集中在本模块，
//! 各客户端不自行拼装 Authorization 头

pub mod auth_client;
pub mod content_client;
pub mod grading_client;

pub use auth_client::AuthClient;
pub use content_client::ContentClient;
pub use grading_client::GradingClient;

use reqwest::{RequestBuilder, Response};

use crate::error::{ApiError, AppError, AppResult};
use crate::session::SessionContext;

/// 为出站请求附加 Bearer 令牌（拦截器等价物）
///
/// 无令牌（未登录或已过期）时请求原样放行，由服务端决定是否拒绝
pub(crate) fn with_bearer(req: RequestBuilder, session: &SessionContext) -> RequestBuilder {
    match session.token() {
        Ok(token) => req.bearer_auth(token),
        Err(_) => req,
    }
}

/// 统一检查响应状态码
///
/// # 返回
/// 401 转为认证错误（调用方应废弃会话），其余非 2xx 转为 API 错误
pub(crate) fn ensure_status(resp: Response, endpoint: &str) -> AppResult<Response> {
    let status = resp.status();
    if status.as_u16() == 401 {
        return Err(AppError::unauthorized(endpoint));
    }
    if !status.is_success() {
        return Err(AppError::Api(ApiError::BadStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        }));
    }
    Ok(resp)
}
