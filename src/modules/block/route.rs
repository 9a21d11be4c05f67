use actix_web::web::{scope, ServiceConfig};

use crate::modules::block::handle::*;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(scope("/blocks").service(get_blocked_users).service(block_user).service(unblock_user));
}
