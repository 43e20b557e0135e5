pub mod approval_api;
pub mod mint_api;
pub mod pool_api;
pub mod token_api;

pub use approval_api::ApprovalApi;
pub use mint_api::MintApi;
pub use pool_api::PoolApi;
pub use token_api::TokenApi;
