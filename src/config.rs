multiversx_sc::imports!();

/// Number of ticket kinds held by the Stake Authority. Kind `k` is SFT nonce `k`.
pub const TICKET_KINDS: u64 = 7;

// ============================================================
// Configuration, written once by `init`
// ============================================================

#[multiversx_sc::module]
pub trait ConfigModule {
    /// Balance a member holds after the fee has been withheld.
    #[view(getNetStake)]
    fn net_stake(&self) -> BigUint {
        self.stake_amount().get() - self.stake_fee().get()
    }

    #[view(getStakeAuthority)]
    #[storage_mapper("stakeAuthorityAddress")]
    fn stake_authority_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getActionExecutor)]
    #[storage_mapper("actionExecutorAddress")]
    fn action_executor_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getStakeToken)]
    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getTicketToken)]
    #[storage_mapper("ticketToken")]
    fn ticket_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getStakeAmount)]
    #[storage_mapper("stakeAmount")]
    fn stake_amount(&self) -> SingleValueMapper<BigUint>;

    #[view(getStakeFee)]
    #[storage_mapper("stakeFee")]
    fn stake_fee(&self) -> SingleValueMapper<BigUint>;

    /// Set once by `approveFungibleSpend`; principal is only forwarded afterwards.
    #[view(isSpendApproved)]
    #[storage_mapper("spendApproved")]
    fn spend_approved(&self) -> SingleValueMapper<bool>;
}
