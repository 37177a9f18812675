//! Entity module - Contains all SeaORM entity definitions for the database.
//! The persistence layer is a single key-value table; domain records live in
//! [`crate::records`] and are serialized into it as JSON blobs.

pub mod kv_entry;

pub use kv_entry::{Column as KvColumn, Entity as KvEntry, Model as KvEntryModel};
