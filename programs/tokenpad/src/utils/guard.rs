use anchor_lang::prelude::*;

use crate::errors::TokenpadError;

/// Scoped reentrancy guard for the factory deploy paths.
///
/// The guard is a plain storage boolean: `acquire` aborts if it is already
/// set, otherwise sets it and hands back a token that must be consumed by
/// `release` before the instruction returns. If the instruction aborts, the
/// storage write rolls back with everything else, so there is no separate
/// unlock-on-failure path.
#[must_use]
pub struct DeployLock(());

impl DeployLock {
    pub fn acquire(flag: &mut bool) -> Result<Self> {
        require!(!*flag, TokenpadError::DeploymentInProgress);
        *flag = true;
        Ok(DeployLock(()))
    }

    pub fn release(self, flag: &mut bool) {
        *flag = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_sets_and_blocks_reentry() {
        let mut flag = false;
        let lock = DeployLock::acquire(&mut flag).unwrap();
        assert!(flag);
        assert!(DeployLock::acquire(&mut flag).is_err());
        lock.release(&mut flag);
        assert!(!flag);
    }

    #[test]
    fn reacquire_after_release() {
        let mut flag = false;
        let lock = DeployLock::acquire(&mut flag).unwrap();
        lock.release(&mut flag);
        let lock = DeployLock::acquire(&mut flag).unwrap();
        lock.release(&mut flag);
        assert!(!flag);
    }
}
