//! Compound domain types
//!
//! Structs built from the validated simple types: the cart line item, the
//! provider delivery policy, and the acting user identity.

mod actor;
mod delivery_policy;
mod line_item;

pub use actor::{Actor, ActorRole};
pub use delivery_policy::DeliveryPolicy;
pub use line_item::LineItem;
