use anchor_lang::prelude::*;

use crate::constants::{MAX_PRESALE_FEE_BPS, MAX_WHITELIST_LEN};
use crate::errors::TokenpadError;
use crate::utils::math::{bps_amount, mul_div_floor, require_bps, require_fee_bps};
use crate::utils::vesting::claimable_amount;

#[derive(Debug, Clone, Copy, AnchorSerialize, AnchorDeserialize, PartialEq, Eq)]
pub enum PresaleStatus {
    Deployed,    // Instance PDA exists, vault not funded yet
    Funded,      // Creator tokens in custody, parameters not set
    Initialized, // Configured; sale window derived from start/end slots
    Finalized,   // Soft cap met, creator settled
    Refunded,    // Soft cap missed, tokens returned to creator
    Cancelled,   // Emergency withdrawal or aborted deployment
}

impl Default for PresaleStatus {
    fn default() -> Self {
        PresaleStatus::Deployed
    }
}

#[derive(Debug, Clone, Copy, Default, AnchorSerialize, AnchorDeserialize)]
pub struct PresaleTerms {
    /// Maximum quote accepted
    pub hard_cap: u64,
    /// Minimum quote for the sale to be finalizable
    pub soft_cap: u64,
    /// Token base units per quote unit
    pub rate: u64,
    /// Per-call contribution minimum
    pub min_buy: u64,
    /// Cumulative per-contributor maximum
    pub max_buy: u64,
    /// Sale window start slot
    pub start_slot: u64,
    /// Sale window end slot
    pub end_slot: u64,
    /// Platform fee at finalization, in basis points
    pub fee_bps: u64,
}

impl PresaleTerms {
    pub const SIZE: usize = 8 * 8;
}

#[derive(Debug, Clone, Copy, Default, AnchorSerialize, AnchorDeserialize)]
pub struct PresaleVesting {
    /// Whether claims vest; when false the full allocation unlocks at end
    pub enabled: bool,
    /// Portion released at the end slot, in basis points
    pub tge_bps: u64,
    /// Cliff length in slots after the end slot
    pub cliff_slots: u64,
    /// Linear release duration in slots after the cliff
    pub vesting_slots: u64,
}

impl PresaleVesting {
    pub const SIZE: usize = 1 + 8 * 3;
}

#[account]
pub struct PresaleState {
    /// Sequential id (also the PDA salt)
    pub id: u64,

    /// Presale creator
    pub creator: Pubkey,

    /// Token mint being sold
    pub token_mint: Pubkey,

    /// Vault custodying sale tokens
    pub token_vault: Pubkey,

    /// Vault custodying the raised quote (WSOL)
    pub quote_vault: Pubkey,

    /// Lifecycle status
    pub status: PresaleStatus,

    /// Orthogonal pause flag; blocks new contributions only
    pub paused: bool,

    /// Whether whitelist gating applies to contributions
    pub whitelist_enabled: bool,

    /// Sale parameters, set at phase-two initialization
    pub terms: PresaleTerms,

    /// Claim vesting parameters
    pub vesting: PresaleVesting,

    // ===== Running Totals =====
    /// Total quote raised
    pub total_raised: u64,

    /// Tokens funded into custody at deployment
    pub total_tokens: u64,

    /// Tokens owed to contributors, fixed at finalization
    pub tokens_sold: u64,

    // ===== Anti-bot Throttle =====
    /// Max distinct new contributors admitted per slot (0 = unlimited)
    pub max_entrants_per_slot: u64,

    /// Slot the entrant counter belongs to
    pub entrant_slot: u64,

    /// New contributors admitted in `entrant_slot`
    pub entrant_count: u64,

    // ===== Enumeration =====
    /// Number of distinct contributors
    pub contributors_count: u64,

    /// bump seed
    pub bump: u8,

    /// Whitelisted addresses (bounded)
    pub whitelist: Vec<Pubkey>,

    /// Reserved space
    pub reserved: [u64; 4],
}

impl PresaleState {
    pub const SIZE: usize = 8 + // discriminator
        8 + // id
        32 + // creator
        32 + // token_mint
        32 + // token_vault
        32 + // quote_vault
        1 + // status
        1 + // paused
        1 + // whitelist_enabled
        PresaleTerms::SIZE +
        PresaleVesting::SIZE +
        8 + // total_raised
        8 + // total_tokens
        8 + // tokens_sold
        8 + // max_entrants_per_slot
        8 + // entrant_slot
        8 + // entrant_count
        8 + // contributors_count
        1 + // bump
        4 + 32 * MAX_WHITELIST_LEN + // whitelist
        8 * 4; // reserved

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            PresaleStatus::Finalized | PresaleStatus::Refunded | PresaleStatus::Cancelled
        )
    }

    pub fn require_status(&self, expected: PresaleStatus) -> Result<()> {
        require!(self.status == expected, TokenpadError::InvalidStatus);
        Ok(())
    }

    /// Validate and adopt sale parameters (phase two of clone-and-initialize).
    pub fn apply_terms(&mut self, terms: PresaleTerms, now_slot: u64) -> Result<()> {
        match self.status {
            PresaleStatus::Funded => {}
            PresaleStatus::Initialized => return err!(TokenpadError::AlreadyInitialized),
            PresaleStatus::Deployed => return err!(TokenpadError::NotFunded),
            _ => return err!(TokenpadError::InvalidStatus),
        }

        require!(terms.hard_cap > 0, TokenpadError::InvalidAmount);
        require!(terms.soft_cap <= terms.hard_cap, TokenpadError::InvalidCaps);
        require!(terms.rate > 0, TokenpadError::InvalidRate);
        require!(terms.min_buy <= terms.max_buy, TokenpadError::InvalidBuyLimits);
        require!(terms.start_slot < terms.end_slot, TokenpadError::InvalidWindow);
        require!(terms.start_slot > now_slot, TokenpadError::InvalidWindow);
        require_fee_bps(terms.fee_bps, MAX_PRESALE_FEE_BPS)?;

        // the funded vault must cover a fully subscribed sale plus the
        // platform fee taken out of it at finalization
        let max_allocation = mul_div_floor(terms.hard_cap, terms.rate, 1)?;
        let required = max_allocation
            .checked_add(bps_amount(max_allocation, terms.fee_bps)?)
            .ok_or(TokenpadError::MathOverflow)?;
        require!(
            self.total_tokens >= required,
            TokenpadError::InsufficientTokenFunding
        );

        self.terms = terms;
        self.status = PresaleStatus::Initialized;
        Ok(())
    }

    /// Creator-side configuration is frozen once the sale window opens.
    pub fn require_config_window(&self, now_slot: u64) -> Result<()> {
        self.require_status(PresaleStatus::Initialized)?;
        require!(
            now_slot < self.terms.start_slot,
            TokenpadError::ConfigurationFrozen
        );
        Ok(())
    }

    pub fn set_vesting(&mut self, vesting: PresaleVesting) -> Result<()> {
        if vesting.enabled {
            require_bps(vesting.tge_bps)?;
            require!(vesting.vesting_slots > 0, TokenpadError::ZeroVestingDuration);
        }
        self.vesting = vesting;
        Ok(())
    }

    /// Validate a contribution and update the running totals. Returns whether
    /// this was the contributor's first participation.
    pub fn record_contribution(
        &mut self,
        prior_contribution: u64,
        amount: u64,
        now_slot: u64,
        whitelisted: bool,
    ) -> Result<bool> {
        self.require_status(PresaleStatus::Initialized)?;
        require!(!self.paused, TokenpadError::PresalePaused);
        require!(now_slot >= self.terms.start_slot, TokenpadError::NotStarted);
        require!(now_slot < self.terms.end_slot, TokenpadError::AlreadyEnded);
        if self.whitelist_enabled {
            require!(whitelisted, TokenpadError::NotWhitelisted);
        }
        require!(amount > 0, TokenpadError::InvalidAmount);
        require!(amount >= self.terms.min_buy, TokenpadError::BelowMinBuy);

        let cumulative = prior_contribution
            .checked_add(amount)
            .ok_or(TokenpadError::MathOverflow)?;
        require!(cumulative <= self.terms.max_buy, TokenpadError::AboveMaxBuy);

        let raised = self
            .total_raised
            .checked_add(amount)
            .ok_or(TokenpadError::MathOverflow)?;
        require!(raised <= self.terms.hard_cap, TokenpadError::HardCapExceeded);

        let is_first = prior_contribution == 0;
        if is_first {
            self.admit_entrant(now_slot)?;
            self.contributors_count = self
                .contributors_count
                .checked_add(1)
                .ok_or(TokenpadError::MathOverflow)?;
        }

        self.total_raised = raised;
        Ok(is_first)
    }

    /// Throttle distinct new contributors per slot; top-ups never pass
    /// through here.
    fn admit_entrant(&mut self, now_slot: u64) -> Result<()> {
        if self.entrant_slot != now_slot {
            self.entrant_slot = now_slot;
            self.entrant_count = 0;
        }

        let admitted = self
            .entrant_count
            .checked_add(1)
            .ok_or(TokenpadError::MathOverflow)?;
        if self.max_entrants_per_slot > 0 {
            require!(
                admitted <= self.max_entrants_per_slot,
                TokenpadError::EntrantThrottled
            );
        }
        self.entrant_count = admitted;
        Ok(())
    }

    pub fn is_whitelisted(&self, address: &Pubkey) -> bool {
        self.whitelist.contains(address)
    }

    /// Batch-add whitelist entries. Zero entries and duplicates are skipped,
    /// and the batch stops quietly once the list is full; returns the number
    /// actually added.
    pub fn add_to_whitelist(&mut self, addresses: &[Pubkey]) -> u32 {
        let mut added = 0u32;
        for address in addresses {
            if *address == Pubkey::default() || self.whitelist.contains(address) {
                continue;
            }
            if self.whitelist.len() >= MAX_WHITELIST_LEN {
                break;
            }
            self.whitelist.push(*address);
            added += 1;
        }
        added
    }

    pub fn soft_cap_met(&self) -> bool {
        self.total_raised >= self.terms.soft_cap
    }

    pub fn require_ended(&self, now_slot: u64) -> Result<()> {
        require!(now_slot >= self.terms.end_slot, TokenpadError::NotEnded);
        Ok(())
    }

    /// Token allocation a contribution buys.
    pub fn allocation_for(&self, contribution: u64) -> Result<u64> {
        mul_div_floor(contribution, self.terms.rate, 1)
    }

    /// Claimable portion of an allocation at `now_slot`, honoring the
    /// optional vesting config. Vesting starts at the sale end slot.
    pub fn claimable_for(
        &self,
        contribution: u64,
        claimed: u64,
        now_slot: u64,
    ) -> Result<u64> {
        let allocation = self.allocation_for(contribution)?;
        if !self.vesting.enabled {
            return Ok(allocation.saturating_sub(claimed));
        }
        claimable_amount(
            allocation,
            self.terms.end_slot,
            self.vesting.cliff_slots,
            self.vesting.vesting_slots,
            self.vesting.tge_bps,
            claimed,
            now_slot,
        )
    }
}

/// Per-contributor position (contribution and claim bookkeeping).
#[account]
#[derive(Default)]
pub struct ContributorPosition {
    /// Contributor address
    pub contributor: Pubkey,

    /// Presale the position belongs to
    pub presale: Pubkey,

    /// Cumulative quote contributed
    pub contributed: u64,

    /// Tokens claimed so far
    pub claimed_tokens: u64,

    /// Whether the quote was refunded after cancellation
    pub refunded: bool,

    /// Slot of first participation
    pub first_contribution_slot: u64,

    /// Position in the contributor enumeration
    pub index: u64,

    /// bump seed
    pub bump: u8,
}

impl ContributorPosition {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1 + 8 + 8 + 1;

    /// A position can be refunded only while untouched: never refunded
    /// before and no tokens claimed out of it.
    pub fn require_refundable(&self) -> Result<()> {
        require!(!self.refunded, TokenpadError::AlreadyRefunded);
        require!(self.claimed_tokens == 0, TokenpadError::TokensAlreadyClaimed);
        require!(self.contributed > 0, TokenpadError::NothingToClaim);
        Ok(())
    }
}

/// Append-only enumeration entry: the Nth distinct contributor of a presale.
#[account]
pub struct ContributorRecord {
    /// Presale the record belongs to
    pub presale: Pubkey,

    /// Position in the enumeration
    pub index: u64,

    /// Contributor address
    pub contributor: Pubkey,

    /// bump seed
    pub bump: u8,
}

impl ContributorRecord {
    pub const SIZE: usize = 8 + 32 + 8 + 32 + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> PresaleTerms {
        PresaleTerms {
            hard_cap: 1000,
            soft_cap: 500,
            rate: 10,
            min_buy: 10,
            max_buy: 600,
            start_slot: 100,
            end_slot: 200,
            fee_bps: 300,
        }
    }

    fn funded_presale() -> PresaleState {
        PresaleState {
            id: 0,
            creator: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            quote_vault: Pubkey::new_unique(),
            status: PresaleStatus::Funded,
            paused: false,
            whitelist_enabled: false,
            terms: PresaleTerms::default(),
            vesting: PresaleVesting::default(),
            total_raised: 0,
            total_tokens: 10_300,
            tokens_sold: 0,
            max_entrants_per_slot: 0,
            entrant_slot: 0,
            entrant_count: 0,
            contributors_count: 0,
            bump: 255,
            whitelist: Vec::new(),
            reserved: [0; 4],
        }
    }

    fn initialized_presale() -> PresaleState {
        let mut presale = funded_presale();
        presale.apply_terms(terms(), 50).unwrap();
        presale
    }

    #[test]
    fn apply_terms_validations() {
        let mut presale = funded_presale();

        let mut bad = terms();
        bad.soft_cap = 1001;
        assert!(presale.apply_terms(bad, 50).is_err());

        let mut bad = terms();
        bad.start_slot = 200;
        bad.end_slot = 200;
        assert!(presale.apply_terms(bad, 50).is_err());

        let mut bad = terms();
        bad.min_buy = 700;
        assert!(presale.apply_terms(bad, 50).is_err());

        let mut bad = terms();
        bad.fee_bps = 1001;
        assert!(presale.apply_terms(bad, 50).is_err());

        // funded 10_300 tokens < hard_cap 1000 * rate 20
        let mut bad = terms();
        bad.rate = 20;
        assert!(presale.apply_terms(bad, 50).is_err());

        presale.apply_terms(terms(), 50).unwrap();
        assert_eq!(presale.status, PresaleStatus::Initialized);
        // one-time
        assert!(presale.apply_terms(terms(), 50).is_err());
    }

    #[test]
    fn funding_must_cover_full_subscription_plus_fee() {
        // exactly hard_cap * rate leaves no headroom for the 300 bps fee
        let mut presale = funded_presale();
        presale.total_tokens = 10_000;
        assert!(presale.apply_terms(terms(), 50).is_err());

        presale.total_tokens = 10_300;
        presale.apply_terms(terms(), 50).unwrap();

        // a fully subscribed sale then settles without underflow
        presale.total_raised = presale.terms.hard_cap;
        let sold = presale.allocation_for(presale.total_raised).unwrap();
        let fee = bps_amount(sold, presale.terms.fee_bps).unwrap();
        assert_eq!(sold, 10_000);
        assert_eq!(fee, 300);
        assert_eq!(presale.total_tokens - sold - fee, 0);
    }

    #[test]
    fn refund_requires_untouched_position() {
        let mut position = ContributorPosition {
            contributor: Pubkey::new_unique(),
            presale: Pubkey::new_unique(),
            contributed: 500,
            claimed_tokens: 0,
            refunded: false,
            first_contribution_slot: 150,
            index: 0,
            bump: 255,
        };
        position.require_refundable().unwrap();

        // a position that already took tokens out cannot also take its quote back
        position.claimed_tokens = 100;
        assert!(position.require_refundable().is_err());

        position.claimed_tokens = 0;
        position.refunded = true;
        assert!(position.require_refundable().is_err());

        position.refunded = false;
        position.contributed = 0;
        assert!(position.require_refundable().is_err());
    }

    #[test]
    fn apply_terms_requires_funding_phase() {
        let mut presale = funded_presale();
        presale.status = PresaleStatus::Deployed;
        assert!(presale.apply_terms(terms(), 50).is_err());
    }

    #[test]
    fn contribution_window_and_caps() {
        let mut presale = initialized_presale();

        // window
        assert!(presale.record_contribution(0, 100, 99, false).is_err());
        assert!(presale.record_contribution(0, 100, 200, false).is_err());

        // min/max buy
        assert!(presale.record_contribution(0, 9, 150, false).is_err());
        assert!(presale.record_contribution(550, 100, 150, false).is_err());

        assert!(presale.record_contribution(0, 600, 150, false).unwrap());
        assert_eq!(presale.total_raised, 600);

        // hard cap
        assert!(presale.record_contribution(0, 500, 150, false).is_err());
        assert!(!presale.record_contribution(100, 400, 150, false).unwrap());
        assert_eq!(presale.total_raised, 1000);
    }

    #[test]
    fn paused_blocks_contributions_only() {
        let mut presale = initialized_presale();
        presale.paused = true;
        assert!(presale.record_contribution(0, 100, 150, false).is_err());
        presale.paused = false;
        assert!(presale.record_contribution(0, 100, 150, false).is_ok());
    }

    #[test]
    fn whitelist_gating() {
        let mut presale = initialized_presale();
        presale.whitelist_enabled = true;
        assert!(presale.record_contribution(0, 100, 150, false).is_err());
        assert!(presale.record_contribution(0, 100, 150, true).is_ok());
    }

    #[test]
    fn anti_bot_throttles_new_contributors_not_topups() {
        let mut presale = initialized_presale();
        presale.max_entrants_per_slot = 2;

        assert!(presale.record_contribution(0, 100, 150, false).unwrap());
        assert!(presale.record_contribution(0, 100, 150, false).unwrap());
        // third distinct first-timer in the same slot
        assert!(presale.record_contribution(0, 100, 150, false).is_err());
        // an existing contributor topping up in that slot still passes
        assert!(!presale.record_contribution(100, 100, 150, false).unwrap());
        // the next slot admits fresh entrants again
        assert!(presale.record_contribution(0, 100, 151, false).unwrap());
    }

    #[test]
    fn whitelist_batch_skips_and_counts() {
        let mut presale = initialized_presale();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let added = presale.add_to_whitelist(&[a, Pubkey::default(), b, a]);
        assert_eq!(added, 2);
        assert!(presale.is_whitelisted(&a));
        assert!(presale.is_whitelisted(&b));
        assert!(!presale.is_whitelisted(&Pubkey::default()));
    }

    #[test]
    fn whitelist_batch_stops_at_capacity() {
        let mut presale = initialized_presale();
        let fill: Vec<Pubkey> = (0..MAX_WHITELIST_LEN - 1)
            .map(|_| Pubkey::new_unique())
            .collect();
        assert_eq!(presale.add_to_whitelist(&fill) as usize, MAX_WHITELIST_LEN - 1);

        // one slot left, two candidates: the first lands, the second is dropped
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_eq!(presale.add_to_whitelist(&[a, b]), 1);
        assert!(presale.is_whitelisted(&a));
        assert!(!presale.is_whitelisted(&b));
        assert_eq!(presale.add_to_whitelist(&[Pubkey::new_unique()]), 0);
    }

    #[test]
    fn soft_cap_gating() {
        let mut presale = initialized_presale();
        presale.record_contribution(0, 400, 150, false).unwrap();
        assert!(!presale.soft_cap_met());
        presale.record_contribution(0, 200, 150, false).unwrap();
        assert!(presale.soft_cap_met());
    }

    #[test]
    fn claimable_without_vesting_is_full_allocation_after_end() {
        let presale = initialized_presale();
        assert_eq!(presale.allocation_for(600).unwrap(), 6000);
        assert_eq!(presale.claimable_for(600, 0, 250).unwrap(), 6000);
        assert_eq!(presale.claimable_for(600, 6000, 250).unwrap(), 0);
    }

    #[test]
    fn claimable_with_vesting_follows_schedule() {
        let mut presale = initialized_presale();
        presale
            .set_vesting(PresaleVesting {
                enabled: true,
                tge_bps: 2000,
                cliff_slots: 10,
                vesting_slots: 100,
            })
            .unwrap();

        // allocation 1000: end=200, cliff to 210, linear to 310
        assert_eq!(presale.claimable_for(100, 0, 205).unwrap(), 200);
        assert_eq!(presale.claimable_for(100, 0, 260).unwrap(), 600);
        assert_eq!(presale.claimable_for(100, 200, 260).unwrap(), 400);
        assert_eq!(presale.claimable_for(100, 0, 310).unwrap(), 1000);
    }

    #[test]
    fn vesting_config_validations() {
        let mut presale = initialized_presale();
        assert!(presale
            .set_vesting(PresaleVesting {
                enabled: true,
                tge_bps: 10_001,
                cliff_slots: 0,
                vesting_slots: 10,
            })
            .is_err());
        assert!(presale
            .set_vesting(PresaleVesting {
                enabled: true,
                tge_bps: 0,
                cliff_slots: 0,
                vesting_slots: 0,
            })
            .is_err());
    }
}
