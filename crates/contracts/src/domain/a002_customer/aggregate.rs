use serde::{Deserialize, Serialize};

/// Directory entry keyed by the normalized phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Normalized phone (digits only) used as the document id
    pub id: String,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerDto {
    /// Present when editing an existing record
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub notes: Option<String>,
}

/// Strip everything except digits: "+7 (999) 123-45-67" -> "79991234567"
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl Customer {
    pub fn from_dto(dto: &CustomerDto) -> Self {
        Self {
            id: normalize_phone(&dto.phone_number),
            name: dto.name.trim().to_string(),
            phone_number: dto.phone_number.trim().to_string(),
            notes: dto
                .notes
                .as_ref()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.chars().count() < 2 {
            return Err("Имя должно содержать не менее 2 символов".to_string());
        }
        if self.id.len() < 10 {
            return Err("Введите корректный номер телефона".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, phone: &str) -> CustomerDto {
        CustomerDto {
            id: None,
            name: name.to_string(),
            phone_number: phone.to_string(),
            notes: None,
        }
    }

    #[test]
    fn phone_normalization() {
        assert_eq!(normalize_phone("+7 (999) 123-45-67"), "79991234567");
        assert_eq!(normalize_phone("8 999 1234567"), "89991234567");
        assert_eq!(normalize_phone("abc"), "");
    }

    #[test]
    fn id_is_derived_from_phone() {
        let c = Customer::from_dto(&dto("Иван Петров", "+7 (999) 123-45-67"));
        assert_eq!(c.id, "79991234567");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn short_name_rejected() {
        let c = Customer::from_dto(&dto("И", "+7 (999) 123-45-67"));
        assert!(c.validate().is_err());
    }

    #[test]
    fn short_phone_rejected() {
        let c = Customer::from_dto(&dto("Иван", "123"));
        assert!(c.validate().is_err());
    }

    #[test]
    fn notes_are_trimmed_to_none() {
        let mut d = dto("Иван", "+7 (999) 123-45-67");
        d.notes = Some("   ".to_string());
        assert_eq!(Customer::from_dto(&d).notes, None);
    }
}
