pub mod abort_deployment;
pub mod claim_airdrop;
pub mod claim_presale;
pub mod claim_vested;
pub mod close_airdrop;
pub mod configure_presale;
pub mod contribute;
pub mod create_airdrop;
pub mod create_schedule;
pub mod deploy_presale;
pub mod deploy_token;
pub mod initialize_config;
pub mod initialize_presale;
pub mod lock_tokens;
pub mod manage_lock;
pub mod refund_contribution;
pub mod revoke_schedule;
pub mod settle_presale;
pub mod unlock_tokens;
pub mod update_config;
pub mod verify_claim;
pub mod whitelist;

pub use abort_deployment::*;
pub use claim_airdrop::*;
pub use claim_presale::*;
pub use claim_vested::*;
pub use close_airdrop::*;
pub use configure_presale::*;
pub use contribute::*;
pub use create_airdrop::*;
pub use create_schedule::*;
pub use deploy_presale::*;
pub use deploy_token::*;
pub use initialize_config::*;
pub use initialize_presale::*;
pub use lock_tokens::*;
pub use manage_lock::*;
pub use refund_contribution::*;
pub use revoke_schedule::*;
pub use settle_presale::*;
pub use unlock_tokens::*;
pub use update_config::*;
pub use verify_claim::*;
pub use whitelist::*;
