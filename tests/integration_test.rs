use std::sync::Arc;

use take_quiz_submit::config::Config;
use take_quiz_submit::models::question::OptionLabel;
use take_quiz_submit::services::{AuthService, QuizLoader};
use take_quiz_submit::session::SessionContext;
use take_quiz_submit::utils::logging;
use take_quiz_submit::workflow::navigator::Advance;
use take_quiz_submit::workflow::quiz_ctx::QuizCtx;
use take_quiz_submit::workflow::quiz_flow::QuizFlow;
use take_quiz_submit::clients::GradingClient;

#[tokio::test]
#[ignore] // 默认忽略，需要真实服务并手动运行：cargo test -- --ignored
async fn test_login_and_load_quiz() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    let session = Arc::new(SessionContext::new(config.token_ttl_secs));

    // 登录
    let auth = AuthService::new(&config, session.clone()).expect("创建认证服务失败");
    auth.login(&config.account_email, &config.account_password)
        .await
        .expect("登录失败");

    assert!(session.is_authenticated(), "登录后应持有有效令牌");

    // 加载课程测验
    let loader = QuizLoader::new(&config, session.clone());
    let loaded = loader
        .load_for_course(config.course_id)
        .await
        .expect("加载测验失败");

    assert!(!loaded.questions.is_empty(), "题目列表不应为空");
    println!("找到 {} 道题", loaded.questions.len());
}

#[tokio::test]
#[ignore]
async fn test_full_quiz_flow() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    let session = Arc::new(SessionContext::new(config.token_ttl_secs));

    // 登录
    let auth = AuthService::new(&config, session.clone()).expect("创建认证服务失败");
    auth.login(&config.account_email, &config.account_password)
        .await
        .expect("登录失败");

    // 加载题集
    let loader = QuizLoader::new(&config, session.clone());
    let loaded = loader
        .load_for_course(config.course_id)
        .await
        .expect("加载测验失败");

    // 全部选 a，走完整个序列
    let ctx = QuizCtx::new(config.course_id, &loaded.quiz);
    let mut flow = QuizFlow::new(ctx, loaded.questions, true);

    loop {
        flow.select_current(OptionLabel::A);
        match flow.next() {
            Advance::Moved(_) => continue,
            Advance::ReadyToSubmit => break,
            Advance::Blocked => unreachable!("已作答不应被拦"),
        }
    }

    // 提交并取成绩
    let grader = GradingClient::new(&config, session.clone());
    let result = flow.submit(&grader).await.expect("提交失败");

    assert!(result.score <= result.max_score, "得分不应超过满分");
    assert!(flow.is_taken(), "提交成功后应标记为已作答");
}
