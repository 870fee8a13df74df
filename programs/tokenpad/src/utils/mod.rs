pub mod guard;
pub mod math;
pub mod merkle;
pub mod vesting;

pub use guard::*;
pub use math::*;
pub use merkle::*;
pub use vesting::*;
