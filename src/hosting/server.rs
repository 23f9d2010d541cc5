use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let acquirer = web::Data::new(config.acquirer()?);
        let loader = web::Data::new(config.loader());
        log::info!(
            "supplying {} points per game, at most {} attempts within {}s",
            config.points,
            config.max_attempts,
            config.deadline_secs
        );
        log::info!("starting point supplier on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allowed_methods(vec!["GET"])
                        .allow_any_header(),
                )
                .app_data(acquirer.clone())
                .app_data(loader.clone())
                .configure(routes)
        })
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

/// Route table, shared by the server and the handler tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health))
        .service(
            web::scope("/api")
                .route("/points", web::get().to(handlers::points))
                .route("/streetview", web::get().to(handlers::points))
                .route("/maps", web::get().to(handlers::maps)),
        );
}
