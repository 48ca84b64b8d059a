#![no_std]

multiversx_sc::imports!();

pub mod action_executor_proxy;
pub mod config;
pub mod dispatch;
pub mod eligibility;
pub mod errors;
pub mod events;
pub mod ledgers;
pub mod membership;
pub mod petting_pool_proxy;
pub mod rewards;
pub mod stake_accounting;
pub mod stake_authority_proxy;
pub mod types;

use errors::{
    ERR_INVALID_CONFIG, ERR_INVALID_STAKE_TOKEN, ERR_SPEND_ALREADY_APPROVED,
    ERR_SPEND_NOT_APPROVED, ERR_WRONG_STAKE_AMOUNT,
};
use types::MemberInfo;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait PettingPool:
    config::ConfigModule
    + events::EventsModule
    + membership::MembershipModule
    + stake_accounting::StakeAccountingModule
    + ledgers::LedgersModule
    + eligibility::EligibilityModule
    + dispatch::DispatchModule
    + rewards::RewardsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        stake_authority_address: ManagedAddress,
        action_executor_address: ManagedAddress,
        stake_token: TokenIdentifier,
        ticket_token: TokenIdentifier,
        stake_amount: BigUint,
        stake_fee: BigUint,
    ) {
        require!(stake_token.is_valid_esdt_identifier(), ERR_INVALID_CONFIG);
        require!(ticket_token.is_valid_esdt_identifier(), ERR_INVALID_CONFIG);
        require!(
            stake_amount > 0u64 && stake_fee < stake_amount,
            ERR_INVALID_CONFIG
        );

        self.stake_authority_address().set(&stake_authority_address);
        self.action_executor_address().set(&action_executor_address);
        self.stake_token().set(&stake_token);
        self.ticket_token().set(&ticket_token);
        self.stake_amount().set(&stake_amount);
        self.stake_fee().set(&stake_fee);
        self.spend_approved().set(false);
        self.lifetime_pets().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: approveFungibleSpend
    // One-time grant letting stake principal flow to the Stake Authority.
    // ========================================================

    #[only_owner]
    #[endpoint(approveFungibleSpend)]
    fn approve_fungible_spend(&self) {
        require!(!self.spend_approved().get(), ERR_SPEND_ALREADY_APPROVED);
        self.spend_approved().set(true);

        let authority = self.stake_authority_address().get();
        self.spend_approved_event(&authority);
    }

    // ========================================================
    // ENDPOINT: stake
    // Exactly the fixed amount of the stake token. The fee stays here,
    // the rest is forwarded to the Stake Authority.
    // ========================================================

    #[payable("*")]
    #[endpoint(stake)]
    fn stake(&self) {
        require!(self.spend_approved().get(), ERR_SPEND_NOT_APPROVED);

        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.stake_token().get() && payment.token_nonce == 0,
            ERR_INVALID_STAKE_TOKEN
        );
        require!(
            payment.amount == self.stake_amount().get(),
            ERR_WRONG_STAKE_AMOUNT
        );

        // Local state is final before the authority is called.
        let net = self.commit_stake(&caller);
        self.authority_stake(&net);
    }

    // ========================================================
    // ENDPOINT: unstake
    // Returns the full net stake. The balance is zeroed before the
    // authority is asked to release it.
    // ========================================================

    #[endpoint(unstake)]
    fn unstake(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.release_stake(&caller);

        self.authority_withdraw(&amount);
        self.send_stake_token(&caller, &amount);
    }

    // ========================================================
    // ENDPOINT: withdrawFees
    // ========================================================

    #[only_owner]
    #[endpoint(withdrawFees)]
    fn withdraw_fees(&self, to: ManagedAddress) {
        let fees = self.take_fees();
        self.send_stake_token(&to, &fees);
        self.fees_withdrawn_event(&to, &fees);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMemberInfo)]
    fn get_member_info(&self, account: ManagedAddress) -> MemberInfo<Self::Api> {
        let index = self.member_index(&account).get() as u64;
        let stake_balance = self.stake_balance(&account).get();
        let is_staked = stake_balance > 0u64;
        MemberInfo {
            is_member: index != 0,
            account,
            index,
            stake_balance,
            is_staked,
        }
    }

    /// Member count, lifetime pets, total staked, fee pool, held stake token.
    #[view(getPoolStats)]
    fn get_pool_stats(&self) -> MultiValue5<u64, u64, BigUint, BigUint, BigUint> {
        let member_count = self.member_slots().len() as u64;
        let lifetime_pets = self.lifetime_pets().get();
        let total_staked = self.total_staked().get();
        let fee_pool = self.fee_pool().get();
        let held = self.stake_token_balance();
        (member_count, lifetime_pets, total_staked, fee_pool, held).into()
    }
}
