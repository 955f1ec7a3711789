use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use brokerme::config::Config;
use brokerme::dashboard;
use brokerme::dispatcher::{dispatch, Response};
use brokerme::BrokerMe;

// ========================================
// MAIN ENTRY POINT
// ========================================

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::global();

    let filter = EnvFilter::try_new(&config.app.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = BrokerMe::new(config);
    tracing::info!(
        "{} ({}x{}) showing {}",
        app.title(),
        config.app.width,
        config.app.height,
        app.servers.read().file_name
    );

    let dashboard_task = config.dashboard.enabled().then(|| {
        let dashboard_app = app.clone();
        let host = config.dashboard.host.clone();
        let port = config.dashboard.port;
        tokio::spawn(async move {
            if let Err(e) = dashboard::start_dashboard_server(dashboard_app, &host, port).await {
                tracing::error!("Dashboard stopped: {}", e);
            }
        })
    });

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(app.snapshot().render().as_bytes()).await?;

    while let Some(line) = lines.next_line().await? {
        let args: Vec<String> = line.split_whitespace().map(String::from).collect();
        if args.is_empty() {
            continue;
        }

        let output = match dispatch(args, &app) {
            Ok(Response::Exit) => return Ok(()),
            Ok(Response::Text(text)) => text,
            Err(e) => format!("ERR {}", e),
        };

        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    // stdin closed without FILE.EXIT: keep serving the dashboard
    if let Some(task) = dashboard_task {
        tracing::info!("Input closed, dashboard keeps running");
        let _ = task.await;
    }

    Ok(())
}
