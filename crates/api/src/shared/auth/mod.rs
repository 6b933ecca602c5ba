mod route_guards;

pub use route_guards::{protect_create_user_route, protect_route};
