pub mod error;
pub mod identity_provider;
pub mod memory_identity_provider;
pub mod memory_profile_store;
pub mod profile_store;
pub mod rest_identity_provider;
pub mod rest_profile_store;
pub mod session;
pub mod store_error;
pub mod wire;

pub use error::{IdentityError, Result as IdentityResult};
pub use identity_provider::IdentityProvider;
pub use memory_identity_provider::MemoryIdentityProvider;
pub use memory_profile_store::MemoryProfileStore;
pub use profile_store::{ProfileFields, ProfileStore};
pub use rest_identity_provider::RestIdentityProvider;
pub use rest_profile_store::RestProfileStore;
pub use session::Session;
pub use store_error::{Result as StoreResult, StoreError};
