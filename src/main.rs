use std::net::TcpListener;

use env_logger::Env;
use ride_booking_backend::{run, shared::config::Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

  let config = Config::default();
  let listener = TcpListener::bind(config.address())?;
  log::info!("Listening on http://{}", listener.local_addr()?);
  log::warn!(
    "CORS accepts any origin with credentials; do not expose this server publicly"
  );

  run(listener)?.await
}
