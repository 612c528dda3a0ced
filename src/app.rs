//! 应用编排层
//!
//! 生命周期：初始化（会话 + 服务）→ 登录 → 角色分发 → 学生答题回路

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::clients::GradingClient;
use crate::config::Config;
use crate::error::AppError;
use crate::models::question::OptionLabel;
use crate::models::user::Role;
use crate::services::{slice_page, AuthService, CatalogService, QuizLoader};
use crate::session::SessionContext;
use crate::utils::logging;
use crate::workflow::navigator::Advance;
use crate::workflow::quiz_ctx::QuizCtx;
use crate::workflow::quiz_flow::QuizFlow;

/// 应用主结构
pub struct App {
    config: Config,
    session: Arc<SessionContext>,
    auth: AuthService,
    catalog: CatalogService,
    loader: QuizLoader,
    grader: GradingClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;
        logging::log_startup(config.course_id);

        // 会话上下文是进程内唯一令牌持有者，注入所有发网络请求的组件
        let session = Arc::new(SessionContext::new(config.token_ttl_secs));

        let auth = AuthService::new(&config, session.clone())?;
        let catalog = CatalogService::new(&config, session.clone());
        let loader = QuizLoader::new(&config, session.clone());
        let grader = GradingClient::new(&config, session.clone());

        Ok(Self {
            config,
            session,
            auth,
            catalog,
            loader,
            grader,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 登录建立会话
        let role = self
            .auth
            .login(&self.config.account_email, &self.config.account_password)
            .await?;

        // 角色分发：穷尽 match，不同角色各有去处
        match role {
            Role::Student => self.take_quiz().await,
            Role::Teacher => {
                info!("教师账号不参与答题，请访问 {}", role.dashboard_route());
                Ok(())
            }
            Role::Admin => {
                info!("管理员账号不参与答题，请访问 {}", role.dashboard_route());
                Ok(())
            }
        }
    }

    /// 学生答题入口：加载课程与题集，失败则禁用入口（无自动重试）
    async fn take_quiz(&self) -> Result<()> {
        // 目录首页预览（纯偏移分页）
        if self.config.verbose_logging {
            if let Ok(courses) = self.catalog.list_courses().await {
                for course in slice_page(&courses, 0, 5) {
                    info!("  · {} (ID {})", course.titre, course.id);
                }
            }
        }

        let course = match self.catalog.find_course(self.config.course_id).await {
            Ok(course) => course,
            Err(e) => return self.disable_entry(e),
        };
        info!("📖 课程: {}", course.titre);

        let loaded = match self.loader.load_for_course(course.id).await {
            Ok(loaded) => loaded,
            Err(e) => return self.disable_entry(e),
        };

        logging::log_quiz_ready(&loaded.quiz.titre, loaded.questions.len());

        let ctx = QuizCtx::new(course.id, &loaded.quiz);
        let mut flow = QuizFlow::new(ctx, loaded.questions, self.config.verbose_logging);

        self.drive(&mut flow).await
    }

    /// 逐题交互回路
    ///
    /// 输入约定：a/b/c/d 选择选项，n 前进（末题时提交），p 后退，q 放弃
    async fn drive(&self, flow: &mut QuizFlow) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        self.print_question(flow);

        while let Some(line) = lines.next_line().await? {
            let input = line.trim().to_lowercase();
            match input.as_str() {
                "n" => match flow.next() {
                    Advance::Moved(_) => self.print_question(flow),
                    // 行内警告已由流程层输出，原地等待作答
                    Advance::Blocked => {}
                    Advance::ReadyToSubmit => match flow.submit(&self.grader).await {
                        Ok(_) => break,
                        Err(e) if e.is_auth_failure() => {
                            self.abandon_session(&e);
                            break;
                        }
                        Err(e) => {
                            // 评分服务的业务拒绝文案原样呈现
                            let text = e
                                .server_message()
                                .map(str::to_string)
                                .unwrap_or_else(|| e.to_string());
                            warn!("⚠️ {}（答案已保留，可再次输入 n 重试提交）", text);
                        }
                    },
                },
                "p" => {
                    if flow.previous() {
                        self.print_question(flow);
                    }
                }
                "q" => {
                    warn!("已放弃本次测验，未提交的答案将丢失");
                    break;
                }
                other => match OptionLabel::parse(other) {
                    Some(label) => flow.select_current(label),
                    None => warn!("无法识别的输入 '{}'，可用: a/b/c/d、n、p、q", other),
                },
            }
        }

        if flow.is_taken() {
            // 仪表盘据此标记阻止重入
            info!("✅ 本测验已记录为已作答，不可再次进入");
        }

        Ok(())
    }

    /// 展示当前题与四个选项
    fn print_question(&self, flow: &QuizFlow) {
        let question = flow.current_question();
        let chosen = flow.current_answer();
        info!(
            "\n[{}/{}] {}",
            flow.current_index() + 1,
            flow.question_count(),
            question.stem
        );
        for label in OptionLabel::ALL {
            let marker = if chosen == Some(label) { "●" } else { " " };
            info!("  {} {}. {}", marker, label, question.option_text(label));
        }
    }

    /// 加载失败：禁用答题入口并提示，不重试
    fn disable_entry(&self, e: AppError) -> Result<()> {
        if e.is_auth_failure() {
            self.abandon_session(&e);
            return Ok(());
        }
        warn!("⚠️ 无可用题目: {}", e);
        warn!("答题入口已禁用，请稍后重新运行");
        Ok(())
    }

    /// 认证失效：清除令牌、废弃会话（未保存答案丢失）
    fn abandon_session(&self, e: &AppError) {
        error!("❌ {}", e);
        self.session.clear();
        error!("会话已废弃，请重新登录（未提交的答案已丢失）");
    }
}
