use camisa::{
    CartUseCase, CategoryFilter, CustomerStore, ExposeSecret, HashMapCartStore,
    HashMapCustomerStore, Price, RegisterError, RegisterUseCase, RegistrationError,
    RegistrationInput, adapters::catalog::parse_catalog, validate,
};

const CATALOG: &str = include_str!("../data/produtos.json");

fn form(json: &str) -> RegistrationInput {
    serde_json::from_str(json).expect("form is valid JSON")
}

#[test]
fn documented_examples_validate() {
    let maria = form(
        r#"{"name":"Maria Silva","taxId":"111.444.777-35","phone":"(11) 91234-5678","email":"maria@example.com","password":"abcdef"}"#,
    );
    assert_eq!(validate(&maria), Ok(()));

    let single_name = RegistrationInput {
        name: "Maria".to_string(),
        ..maria.clone()
    };
    let error = validate(&single_name).unwrap_err();
    assert_eq!(error, RegistrationError::NameInvalid);
    assert_eq!(error.to_string(), "name and surname required.");
}

#[tokio::test]
async fn register_then_shop() {
    let customers = HashMapCustomerStore::new();
    let register = RegisterUseCase::new(&customers);

    let customer = register
        .execute(form(
            r#"{"name":"João Pereira","tax_id":"529.982.247-25","phone":"(21) 3456-7890","email":"joao@example.com","password":"camisa10"}"#,
        ))
        .await
        .expect("registration succeeds");

    let stored = customers.get_customer(customer.email()).await.unwrap();
    assert_eq!(stored.email().as_ref().expose_secret(), "joao@example.com");

    let rejected = register
        .execute(form(
            r#"{"name":"João Pereira","tax_id":"529.982.247-25","phone":"(21) 3456-7890","email":"joao@example.com"}"#,
        ))
        .await;
    assert_eq!(
        rejected.unwrap_err(),
        RegisterError::Invalid(RegistrationError::PasswordTooShort)
    );

    let catalog = parse_catalog(CATALOG).unwrap();
    let brasileirao = catalog.league("brasileirao");
    assert_eq!(brasileirao.products.len(), 2);

    let carts = CartUseCase::new(HashMapCartStore::new());
    for product in brasileirao.filter(&CategoryFilter::All) {
        carts.add_item("joao", product, "G").await.unwrap();
    }

    let summary = carts.summary("joao").await.unwrap();
    assert_eq!(summary.quantity, 2);
    // Flamengo on sale at 199.90 plus Palmeiras at 279.90
    assert_eq!(summary.total, Price::from_centavos(47980));
}
