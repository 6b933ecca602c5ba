mod payment_webhook;

use actix_web::web;
use payment_webhook::payment_webhook_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/webhooks/payments", web::post().to(payment_webhook_controller));
}
