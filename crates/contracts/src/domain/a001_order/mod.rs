pub mod aggregate;
pub mod pricing;

pub use aggregate::{add_to_cart, DraftItem, Order, OrderDraft, OrderItem, OrderStatus, PaymentMethod};
