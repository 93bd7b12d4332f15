use anyhow::Result;
use paper_search_agent::utils::logging;
use paper_search_agent::{Config, KeywordWorkflow, LlmClient, PaperSource};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();
    logging::init_log_file(&config.output_log_file)?;
    logging::log_startup(&config.llm_api_base_url, &config.extractor_model, config.max_retries);

    // 命令行参数：<研究需求描述> [文献来源]
    let mut args = std::env::args().skip(1);
    let user_message = args
        .next()
        .unwrap_or_else(|| "我需要查找与大模型，联邦学习相关的分层联邦学习文章".to_string());
    let paper_source = args
        .next()
        .and_then(|s| PaperSource::from_str(&s))
        .unwrap_or(PaperSource::ArXiv);

    // 运行关键词工作流
    let client = LlmClient::new(&config);
    let workflow = KeywordWorkflow::new(&config, client);
    let state = workflow.run(user_message, paper_source, None).await;

    logging::append_run_record(&config.output_log_file, &state)?;

    // 使用关键词前必须先检查错误标记
    if state.error {
        anyhow::bail!(
            "工作流失败: {}",
            state.error_message.as_deref().unwrap_or("未知错误")
        );
    }

    println!("中文关键词: {}", state.chinese_keywords.as_deref().unwrap_or(&[]).join(", "));
    println!("英文关键词: {}", state.english_keywords().join(", "));

    Ok(())
}
