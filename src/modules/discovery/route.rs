use actix_web::web::{scope, ServiceConfig};

use crate::modules::discovery::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/nearby").service(get_nearby_users).service(get_nearby_venues));
}
