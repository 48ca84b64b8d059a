multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Membership ──

    #[event("memberAdded")]
    fn member_added_event(&self, #[indexed] account: &ManagedAddress, #[indexed] index: u64);

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] account: &ManagedAddress, #[indexed] index: u64);

    // ── Stake accounting ──

    #[event("stake")]
    fn stake_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] balance: &BigUint,
        fee: &BigUint,
    );

    #[event("unstake")]
    fn unstake_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("feesWithdrawn")]
    fn fees_withdrawn_event(&self, #[indexed] to: &ManagedAddress, amount: &BigUint);

    #[event("spendApproved")]
    fn spend_approved_event(&self, #[indexed] spender: &ManagedAddress);

    // ── Dispatch / rewards ──

    #[event("petDispatched")]
    fn pet_dispatched_event(
        &self,
        #[indexed] count: u64,
        #[indexed] lifetime_pets: u64,
        ids: &ManagedVec<u64>,
    );

    #[event("ticketsSwept")]
    fn tickets_swept_event(&self, #[indexed] to: &ManagedAddress, ids: &ManagedVec<u64>);

    #[event("rewardsReceived")]
    fn rewards_received_event(&self, #[indexed] from: &ManagedAddress, transfer_count: u64);
}
