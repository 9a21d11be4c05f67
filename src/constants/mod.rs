pub struct Env {
    pub jwt_secret: String,
    pub database_url: String,
    pub redis_url: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub daily_free_message_limit: u32,
    pub default_search_radius_km: f64,
}

impl Env {
    fn new() -> Self {
        let jwt_secret = std::env::var("SECRET_KEY")
            .expect("SECRET_KEY must be set in .env file or environment variable");

        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");
        let redis_url = std::env::var("REDIS_URL")
            .expect("REDIS_URL must be set in .env file or environment variable");

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");

        // 0 means unlimited; premium senders are exempt either way
        let daily_free_message_limit = std::env::var("DAILY_FREE_MESSAGE_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .expect("DAILY_FREE_MESSAGE_LIMIT must be a valid u32 integer");
        let default_search_radius_km = std::env::var("DEFAULT_SEARCH_RADIUS_KM")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<f64>()
            .expect("DEFAULT_SEARCH_RADIUS_KM must be a valid number");

        Env {
            jwt_secret,
            database_url,
            redis_url,
            frontend_url,
            ip,
            port,
            daily_free_message_limit,
            default_search_radius_km,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
