//! HTTP request handlers.
//!
//! Handlers convert request DTOs into server parameters, call the matching service and
//! convert the returned domain model back into a DTO. Every handler carries a
//! `#[utoipa::path]` annotation collected by the router into the OpenAPI document.

pub mod dashboard;
pub mod health;
pub mod reservation;
pub mod room;

#[cfg(test)]
mod test;
