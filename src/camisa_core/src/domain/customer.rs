use secrecy::Secret;

use super::registration::{
    Cpf, CustomerName, Email, Password, Phone, RegistrationError, RegistrationInput,
};

/// A customer whose registration passed every rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: CustomerName,
    cpf: Cpf,
    phone: Phone,
    email: Email,
    password: Password,
}

impl Customer {
    pub fn new(
        name: CustomerName,
        cpf: Cpf,
        phone: Phone,
        email: Email,
        password: Password,
    ) -> Self {
        Self {
            name,
            cpf,
            phone,
            email,
            password,
        }
    }

    pub fn name(&self) -> &CustomerName {
        &self.name
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

impl TryFrom<&RegistrationInput> for Customer {
    type Error = RegistrationError;

    fn try_from(input: &RegistrationInput) -> Result<Self, Self::Error> {
        // Order matters: the customer sees the first broken rule only.
        let name = CustomerName::parse(&input.name)?;
        let cpf = Cpf::parse(&input.tax_id)?;
        let phone = Phone::parse(&input.phone)?;
        let email = Email::try_from(Secret::clone(&input.email))?;
        let password = Password::try_from(Secret::clone(&input.password))?;

        Ok(Self::new(name, cpf, phone, email, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn builds_customer_from_valid_input() {
        let input = RegistrationInput {
            name: "João  Pereira".to_string(),
            tax_id: "529.982.247-25".to_string(),
            phone: "(21) 3456-7890".to_string(),
            email: Secret::new("joao@example.com".to_string()),
            password: Secret::new("camisa10".to_string()),
        };

        let customer = Customer::try_from(&input).unwrap();
        assert_eq!(customer.name().as_ref(), "João Pereira");
        assert_eq!(customer.cpf().to_string(), "529.982.247-25");
        assert_eq!(customer.phone().digits(), "2134567890");
        assert_eq!(
            customer.email().as_ref().expose_secret(),
            "joao@example.com"
        );
        assert_eq!(customer.password().as_ref().expose_secret(), "camisa10");
    }
}
