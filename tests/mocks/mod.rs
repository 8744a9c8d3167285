//! Test doubles for the store and the client API.

mod failing_store;
mod mock_contacts_api;

#[allow(unused_imports)]
pub use failing_store::FailingStore;
#[allow(unused_imports)]
pub use mock_contacts_api::MockContactsApi;
