pub mod airdrop;
pub mod lock;
pub mod platform_config;
pub mod presale;
pub mod registry;
pub mod vesting;

pub use airdrop::*;
pub use lock::*;
pub use platform_config::*;
pub use presale::*;
pub use registry::*;
pub use vesting::*;
