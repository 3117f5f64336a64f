pub mod contact;
pub mod ids;
pub mod phone;

pub use contact::Contact;
pub use ids::ContactId;
pub use phone::{canonicalize, canonicalize_for_region, DOMESTIC_REGION};
