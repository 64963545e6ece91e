//! Guest fixtures for creating in-memory test data.

use entity::guest;

/// Default first name.
pub const DEFAULT_FIRST_NAME: &str = "Mario";

/// Default last name.
pub const DEFAULT_LAST_NAME: &str = "Rossi";

/// Default identity document number.
pub const DEFAULT_DOCUMENT_NUMBER: &str = "AB123456";

/// Default nationality.
pub const DEFAULT_NATIONALITY: &str = "Italian";

/// Creates a guest entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Mario"`
/// - last_name: `"Rossi"`
/// - document_number: `"AB123456"`
/// - nationality: `"Italian"`
/// - email: `Some("mario.rossi@example.com")`
/// - phone: `None`
pub fn entity() -> guest::Model {
    entity_builder().build()
}

/// Creates a guest entity builder for customization.
pub fn entity_builder() -> GuestEntityBuilder {
    GuestEntityBuilder::default()
}

/// Builder for creating customized guest entity models.
pub struct GuestEntityBuilder {
    id: i32,
    first_name: String,
    last_name: String,
    document_number: String,
    nationality: String,
    email: Option<String>,
    phone: Option<String>,
}

impl Default for GuestEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            last_name: DEFAULT_LAST_NAME.to_string(),
            document_number: DEFAULT_DOCUMENT_NUMBER.to_string(),
            nationality: DEFAULT_NATIONALITY.to_string(),
            email: Some("mario.rossi@example.com".to_string()),
            phone: None,
        }
    }
}

impl GuestEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn document_number(mut self, document_number: impl Into<String>) -> Self {
        self.document_number = document_number.into();
        self
    }

    pub fn nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Builds and returns the guest entity model.
    pub fn build(self) -> guest::Model {
        guest::Model {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_number: self.document_number,
            nationality: self.nationality,
            email: self.email,
            phone: self.phone,
        }
    }
}
