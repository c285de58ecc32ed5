use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use graph_cli::{
    controller::Outcome,
    helper::{batch::interactive, ctx::Args, single::render_one},
    stdio::loading_bar,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render a Graph API user profile as an HTML card")]
struct Cli {
    /// User id to look up. Reads ids from stdin when omitted.
    user_id: Option<String>,
    #[arg(long, short = 'o', default_value = "./card.html")]
    output: PathBuf,
    #[arg(long, env = "GRAPH_BASE_URL", default_value = "https://graph.facebook.com")]
    base_url: String,
    #[arg(long, env = "GRAPH_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_writer(loading_bar)
                .with_filter(filter),
        )
        .init();

    let Cli {
        user_id,
        output,
        base_url,
        access_token,
    } = Cli::parse();
    info!("Started: user_id={user_id:?} output={} base_url={base_url}", output.display());

    let args = Args::builder()
        .access_token(access_token)
        .api_base_url(base_url)
        .output_path(output)
        .build()?;

    let code = match user_id {
        Some(user_id) => match render_one(&args, &user_id).await? {
            Outcome::Rendered => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        },
        None => {
            interactive(&args).await?;
            ExitCode::SUCCESS
        }
    };

    info!("Task Exit");
    Ok(code)
}
