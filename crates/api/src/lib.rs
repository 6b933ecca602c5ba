mod contact;
mod dashboard;
mod error;
mod history;
mod job_schedulers;
mod reminder;
mod shared;
mod status;
mod user;
mod webhook;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use error::FollowupError;
use followup_infra::FollowupContext;
use job_schedulers::start_send_reminders_job;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    contact::configure_routes(cfg);
    dashboard::configure_routes(cfg);
    history::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
    user::configure_routes(cfg);
    webhook::configure_routes(cfg);
}

/// Extractor errors get the same json error body as the rest of the api
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _| FollowupError::BadClientData(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _| FollowupError::BadClientData(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _| FollowupError::BadClientData(err.to_string()).into()),
    );
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: FollowupContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: FollowupContext) {
        start_send_reminders_job(context);
    }

    async fn configure_server(context: FollowupContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .service(
                    web::scope("/api/v1")
                        .configure(configure_extractors)
                        .configure(configure_server_api),
                )
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
