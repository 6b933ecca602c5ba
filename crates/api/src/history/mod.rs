mod get_history;

use actix_web::web;
use get_history::get_history_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/history", web::get().to(get_history_controller));
}
