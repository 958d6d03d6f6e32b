//! Server Use Cases
//!
//! Business logic for managing network-boot server configurations.

mod create_server;
mod delete_all_servers;
mod delete_server;
mod find_server;
mod list_servers;
mod update_server;

#[cfg(test)]
mod test_support;

pub use create_server::CreateServerUseCase;
pub use delete_all_servers::DeleteAllServersUseCase;
pub use delete_server::DeleteServerUseCase;
pub use find_server::FindServerUseCase;
pub use list_servers::ListServersUseCase;
pub use update_server::UpdateServerUseCase;
