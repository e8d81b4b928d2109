pub mod aggregate;

pub use aggregate::{normalize_phone, Customer, CustomerDto};
