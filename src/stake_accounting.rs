multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_STAKING, ERR_NOTHING_STAKED};

// ============================================================
// Stake accounting
//
// Balances are either zero or exactly `net_stake`. These functions
// only touch local state; callers perform the token movements after
// they return.
// ============================================================

#[multiversx_sc::module]
pub trait StakeAccountingModule:
    crate::config::ConfigModule + crate::membership::MembershipModule + crate::events::EventsModule
{
    /// Records a fresh stake for `account` and returns the amount to forward.
    fn commit_stake(&self, account: &ManagedAddress) -> BigUint {
        require!(self.stake_balance(account).get() == 0u64, ERR_ALREADY_STAKING);

        let fee = self.stake_fee().get();
        let net = self.net_stake();

        self.fee_pool().update(|pool| *pool += &fee);
        self.stake_balance(account).set(&net);
        self.total_staked().update(|total| *total += &net);
        self.add_member(account);

        self.stake_event(account, &net, &fee);
        net
    }

    /// Zeroes the stake of `account` and returns the amount to pay back.
    fn release_stake(&self, account: &ManagedAddress) -> BigUint {
        let balance = self.stake_balance(account).get();
        require!(balance > 0u64, ERR_NOTHING_STAKED);

        self.stake_balance(account).clear();
        self.total_staked().update(|total| *total -= &balance);
        self.remove_member(account);

        self.unstake_event(account, &balance);
        balance
    }

    /// Empties the fee pool in one step and returns what it held.
    fn take_fees(&self) -> BigUint {
        let fees = self.fee_pool().get();
        self.fee_pool().clear();
        fees
    }

    /// Full net stake plus a registry slot.
    fn has_full_stake(&self, account: &ManagedAddress) -> bool {
        self.stake_balance(account).get() == self.net_stake() && self.is_member(account)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isStaked)]
    fn is_staked(&self, account: &ManagedAddress) -> bool {
        self.stake_balance(account).get() > 0u64
    }

    #[view(getStakeBalance)]
    #[storage_mapper("stakeBalance")]
    fn stake_balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getFeePool)]
    #[storage_mapper("feePool")]
    fn fee_pool(&self) -> SingleValueMapper<BigUint>;

    /// Sum of all live member balances.
    #[view(getTotalStaked)]
    #[storage_mapper("totalStaked")]
    fn total_staked(&self) -> SingleValueMapper<BigUint>;
}
