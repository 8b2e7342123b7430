use log::info;
use zip_bundler::{app, utils, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    utils::logger::initialize();

    let config = Config::default();
    config.ensure_dirs()?;

    let addr = config.addr;
    let app = app(config);

    info!("Server started on http://{}", addr);

    // Start the server
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
