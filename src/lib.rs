pub mod bookings;
pub mod health;
pub mod quotes;
pub mod shared;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use bookings::create_booking;
use health::{health, health_check};
use quotes::create_quote;
use shared::{
  http_error::{method_not_allowed, not_found},
  request_error::json_config,
};

// Function to initialize the App
pub fn config(config: &mut web::ServiceConfig) {
  config
    .app_data(json_config())
    .service(
      web::resource("/")
        .route(web::get().to(health_check))
        .route(web::head().to(health_check))
        .default_service(web::to(method_not_allowed)),
    )
    .service(
      web::resource("/health")
        .route(web::get().to(health))
        .default_service(web::to(method_not_allowed)),
    )
    .service(
      web::resource("/book")
        .route(web::post().to(create_booking))
        .default_service(web::to(method_not_allowed)),
    )
    .service(
      web::resource("/quote")
        .route(web::post().to(create_quote))
        .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(not_found));
}

/// Accepts every origin, method and header, with credentials. Meant for
/// development on an open network (mobile clients on the LAN), not for
/// production exposure.
pub fn cors() -> Cors {
  Cors::permissive()
}

pub fn run(listener: TcpListener) -> std::io::Result<Server> {
  let server = HttpServer::new(|| {
    App::new()
      .wrap(Logger::default())
      .wrap(cors())
      .configure(config)
  })
  .listen(listener)?
  .run();
  Ok(server)
}
