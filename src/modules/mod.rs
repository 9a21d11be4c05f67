pub mod block;
pub mod conversation;
pub mod discovery;
pub mod geo;
pub mod location;
pub mod message;
pub mod notification;
pub mod premium;
pub mod profile;
