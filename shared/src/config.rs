use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub mail: MailConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    pub fn new() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let mail = MailConfig {
            endpoint: env::var("MAIL_ENDPOINT")?,
            api_key: env::var("MAIL_API_KEY")?,
            sender: env::var("MAIL_SENDER")?,
            admin_address: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@facilities.local".into()),
        };
        let admin = AdminConfig {
            api_key: env::var("ADMIN_API_KEY")?,
        };
        Ok(Self {
            database,
            mail,
            admin,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct MailConfig {
    pub endpoint: String,
    pub api_key: String,
    pub sender: String,
    pub admin_address: String,
}

pub struct AdminConfig {
    pub api_key: String,
}
