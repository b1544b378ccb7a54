pub mod create_vault;
pub mod deposit;
pub mod initialize_registry;
pub mod manage_admins;
pub mod mint_shares;
pub mod pause;
pub mod redeem;
pub mod register_user;
pub mod set_allocation;
pub mod set_price_feed;
pub mod set_protocol_address;
pub mod vault_valuation;
pub mod withdraw;

pub use create_vault::*;
pub use deposit::*;
pub use initialize_registry::*;
pub use manage_admins::*;
pub use mint_shares::*;
pub use pause::*;
pub use redeem::*;
pub use register_user::*;
pub use set_allocation::*;
pub use set_price_feed::*;
pub use set_protocol_address::*;
pub use vault_valuation::*;
pub use withdraw::*;
