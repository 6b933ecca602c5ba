mod create_contact;
mod delete_contact;
mod get_contact;
mod get_contacts;
mod update_contact;

use actix_web::web;
use create_contact::create_contact_controller;
use delete_contact::delete_contact_controller;
use get_contact::get_contact_controller;
use get_contacts::get_contacts_controller;
use update_contact::update_contact_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contacts", web::post().to(create_contact_controller));
    cfg.route("/contacts", web::get().to(get_contacts_controller));
    cfg.route("/contacts/{contact_id}", web::get().to(get_contact_controller));
    cfg.route("/contacts/{contact_id}", web::put().to(update_contact_controller));
    cfg.route(
        "/contacts/{contact_id}",
        web::delete().to(delete_contact_controller),
    );
}
