//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer:
//!
//! - **Business Logic**: Lifecycle transitions, date and guest validation, pricing
//! - **Orchestration**: Coordinating repository calls inside one database transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Serialising availability checks per room through `RoomLockService`

pub mod availability;
pub mod dashboard;
pub mod pricing;
pub mod reservation;
pub mod room;
pub mod room_lock;
