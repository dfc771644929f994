use camisa_adapters::{
    catalog::load_catalog, config::StorefrontSetting, persistence::HashMapCustomerStore,
    telemetry::init_tracing,
};
use camisa_application::{RegisterError, RegisterUseCase};
use camisa_core::{CategoryFilter, LEAGUES, RegistrationInput};
use color_eyre::eyre::{Result, WrapErr};

/// Loads the catalog, prints a per-league summary and checks any registration forms passed
/// as JSON files on the command line.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = StorefrontSetting::load().wrap_err("failed to load storefront settings")?;
    init_tracing(&config.logging)?;

    let catalog = load_catalog(&config.catalog.path)?;
    for league in LEAGUES.iter() {
        let listing = catalog.league(league.id);
        tracing::info!(
            league = league.name,
            products = listing.products.len(),
            categories = ?listing.categories(),
            "league listing"
        );
    }
    tracing::info!(
        total = catalog.filter(&CategoryFilter::All).len(),
        categories = ?catalog.categories(),
        "catalog ready"
    );

    let customer_store = HashMapCustomerStore::new();
    let register = RegisterUseCase::new(&customer_store);

    for path in std::env::args().skip(1) {
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read registration form {path}"))?;
        let input: RegistrationInput = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("registration form {path} is not valid JSON"))?;

        match register.execute(input).await {
            Ok(_) => tracing::info!(form = %path, "registration accepted"),
            Err(RegisterError::Invalid(rule)) => {
                tracing::warn!(
                    form = %path,
                    code = rule.code(),
                    message = %rule,
                    "registration rejected"
                )
            }
            Err(RegisterError::CustomerStoreError(e)) => {
                tracing::warn!(form = %path, error = %e, "registration not stored")
            }
        }
    }

    Ok(())
}
