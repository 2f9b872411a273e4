//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod receipt;

pub use receipt::{Column as ReceiptColumn, Entity as Receipt, Model as ReceiptModel};
