pub mod entities;
pub mod services;

#[cfg(test)]
pub mod fixtures;

#[derive(Clone, Debug)]
pub struct NewswireConfig {
    pub database: DatabaseConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}
