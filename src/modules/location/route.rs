use actix_web::web::{scope, ServiceConfig};

use crate::modules::location::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/location").service(update_location).service(get_location));
}
