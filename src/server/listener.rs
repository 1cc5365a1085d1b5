use crate::config::Config;
use crate::files::StaticHandler;
use crate::http::connection::Connection;
use tokio::net::TcpListener;
use tracing::info;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let handler = StaticHandler::new(&cfg.static_files)?;

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);
    info!("Serving files from {}", handler.root().display());

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let handler = handler.clone();
        let read_timeout = cfg.server.read_timeout_secs;
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, handler, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
