//! # Take Quiz Submit
//!
//! 一个在线测验答题的 Rust 客户端：远端学习管理 REST API 之上的瘦客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Session）
//! - `session/` - 持有稀缺资源（登录令牌），只暴露能力
//! - `SessionContext` - 唯一的令牌持有者，提供 token() / is_expired() / clear()
//!
//! ### ② 客户端层（Clients）
//! - `clients/` - 所有 HTTP 交互，Bearer 注入集中于此
//! - `AuthClient` - 登录/注册
//! - `ContentClient` - 课程/测验/题目只读
//! - `GradingClient` - 整卷批量提交
//!
//! ### ③ 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个动作
//! - `AuthService` - 建立/废弃会话、角色解析
//! - `CatalogService` - 课程目录与分页切片
//! - `QuizLoader` - 加载一门课程的测验题集
//! - `ResultPresenter` - 渲染一份成绩
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 定义"一次测验会话"的完整流程
//! - `QuizCtx` - 上下文封装（课程 + 测验 + 幂等键）
//! - `AnswerSheet` / `Navigator` / `SubmissionGate` - 答题卡、导航、提交门
//! - `QuizFlow` - 流程编排（作答 → 导航 → 提交 → 成绩）
//!
//! 编排层 `app.rs` 负责登录、角色分发与交互回路。
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::question::{OptionLabel, Question};
pub use models::submission::TestResult;
pub use models::user::Role;
pub use session::SessionContext;
pub use workflow::{Advance, AnswerSheet, Navigator, QuizCtx, QuizFlow, SubmissionGate};
