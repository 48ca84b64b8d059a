#![no_std]

multiversx_sc::imports!();

pub mod action_executor_mock_proxy;

// ============================================================
// Action Executor stand-in for scenario tests.
//
// Remembers the last batch passed to `interact` and keeps a plain
// owner -> operator approval table.
// ============================================================

#[multiversx_sc::contract]
pub trait ActionExecutorMock {
    #[init]
    fn init(&self) {}

    #[endpoint(interact)]
    fn interact(&self, token_ids: ManagedVec<u64>) {
        self.last_batch().set(&token_ids);
        self.interaction_count().update(|count| *count += 1);
    }

    #[endpoint(setApprovalForAll)]
    fn set_approval_for_all(&self, operator: ManagedAddress, approved: bool) {
        let owner = self.blockchain().get_caller();
        self.approvals(&owner, &operator).set(approved);
    }

    #[view(isApprovedForAll)]
    fn is_approved_for_all(&self, owner: ManagedAddress, operator: ManagedAddress) -> bool {
        self.approvals(&owner, &operator).get()
    }

    #[view(getLastBatch)]
    #[storage_mapper("lastBatch")]
    fn last_batch(&self) -> SingleValueMapper<ManagedVec<u64>>;

    #[view(getInteractionCount)]
    #[storage_mapper("interactionCount")]
    fn interaction_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("approvals")]
    fn approvals(
        &self,
        owner: &ManagedAddress,
        operator: &ManagedAddress,
    ) -> SingleValueMapper<bool>;
}
