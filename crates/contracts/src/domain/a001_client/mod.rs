pub mod aggregate;

pub use aggregate::{BusinessType, Client, ClientId, ClientInsert, CreateClientRequest};
