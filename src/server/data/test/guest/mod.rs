use crate::server::{data::guest::GuestRepository, model::guest::NewGuest};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;

fn new_guest(document_number: &str) -> NewGuest {
    NewGuest {
        first_name: "Sophie".to_string(),
        last_name: "Dupont".to_string(),
        document_number: document_number.to_string(),
        nationality: "French".to_string(),
        email: Some("sophie.dupont@example.fr".to_string()),
        phone: None,
    }
}
