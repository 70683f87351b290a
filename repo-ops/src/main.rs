use log::{error, info};
use repo_ops::Result;
use std::env;

#[tokio::main]
async fn main() {
    // set up logging, allowing debug level logging by default
    env_logger::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    info!("repo-ops starting");

    if let Err(err) = try_main().await {
        error!("operation failed: {}", err);
        println!("operation failed: {}", err);
    }
}

async fn try_main() -> Result<()> {
    let access_token = env::var("GITEE_ACCESS_TOKEN")
        .map_err(|_| "GITEE_ACCESS_TOKEN environment variable not set")?;

    let mut builder = gitee::Client::builder().access_token(access_token);
    if let Ok(base_url) = env::var("GITEE_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    repo_ops::run(&client).await
}
