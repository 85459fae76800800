pub mod mock_contact_client;
pub mod mock_contact_repository;

#[allow(unused_imports)]
pub use mock_contact_client::MockContactClient;
#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
