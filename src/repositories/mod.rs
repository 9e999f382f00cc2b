mod contact_registry;
mod traits;

pub use contact_registry::ContactRegistry;
pub use traits::ContactRepository;
