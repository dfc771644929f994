pub mod env {
    pub const ENV_PREFIX: &str = "CAMISA";
    pub const ENV_SEPARATOR: &str = "__";
    pub const CATALOG_PATH_ENV_VAR: &str = "CAMISA__CATALOG__PATH";
    pub const LOG_FILTER_ENV_VAR: &str = "CAMISA__LOGGING__FILTER";
}

pub mod defaults {
    pub const CONFIG_FILE: &str = "config/storefront";
    pub const CATALOG_PATH: &str = "data/produtos.json";
    pub const LOG_FILTER: &str = "info";
}
