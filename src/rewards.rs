multiversx_sc::imports!();

use crate::{
    config::TICKET_KINDS,
    errors::{ERR_BATCH_LENGTH_MISMATCH, ERR_INVALID_TICKET_ID},
};

#[multiversx_sc::module]
pub trait RewardsModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::ledgers::LedgersModule
{
    // ========================================================
    // ENDPOINT: claimAndSweep
    // Claims tickets from the Stake Authority and forwards the same
    // batch to the owner. No retry; tickets left in custody are moved
    // later with `sweepTickets`.
    // ========================================================

    #[only_owner]
    #[endpoint(claimAndSweep)]
    fn claim_and_sweep(&self, ids: ManagedVec<u64>, values: ManagedVec<BigUint>) {
        self.require_valid_ticket_batch(&ids, &values);

        self.authority_claim_tickets(&ids, &values);
        self.sweep_to_owner(&ids, &values);
    }

    #[only_owner]
    #[endpoint(sweepTickets)]
    fn sweep_tickets(&self, ids: ManagedVec<u64>, values: ManagedVec<BigUint>) {
        self.require_valid_ticket_batch(&ids, &values);
        self.sweep_to_owner(&ids, &values);
    }

    /// Accepts any incoming token transfer so claimed rewards can be custodied.
    #[payable("*")]
    #[endpoint(acceptRewards)]
    fn accept_rewards(&self) {
        let caller = self.blockchain().get_caller();
        let transfer_count = self.call_value().all_esdt_transfers().len() as u64;
        self.rewards_received_event(&caller, transfer_count);
    }

    fn sweep_to_owner(&self, ids: &ManagedVec<u64>, values: &ManagedVec<BigUint>) {
        let owner = self.blockchain().get_owner_address();
        self.send_tickets(&owner, ids, values);
        self.tickets_swept_event(&owner, ids);
    }

    fn require_valid_ticket_batch(&self, ids: &ManagedVec<u64>, values: &ManagedVec<BigUint>) {
        require!(ids.len() == values.len(), ERR_BATCH_LENGTH_MISMATCH);
        for id in ids.iter() {
            require!((1..=TICKET_KINDS).contains(&id), ERR_INVALID_TICKET_ID);
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTicketBalances)]
    fn get_ticket_balances(&self) -> MultiValueEncoded<BigUint> {
        self.ticket_balances().into()
    }

    /// Frens accrued by this contract's pooled stake.
    #[view(getFrens)]
    fn get_frens(&self) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.authority_frens(&own_address)
    }
}
