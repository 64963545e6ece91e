//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries and return domain models, keeping entity types
//! out of the service layer. Each repository is generic over `ConnectionTrait` so the same
//! queries run on the pooled connection or inside a `DatabaseTransaction`.

pub mod guest;
pub mod reservation;
pub mod room;
