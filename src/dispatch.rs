multiversx_sc::imports!();

use crate::errors::ERR_PET_COUNTER_OVERFLOW;

#[multiversx_sc::module]
pub trait DispatchModule:
    crate::config::ConfigModule + crate::events::EventsModule + crate::ledgers::LedgersModule
{
    // ========================================================
    // ENDPOINT: dispatch
    // Ids are forwarded verbatim. The caller pre-filters them with
    // `isEligible`; nothing is de-duplicated or re-checked here. An
    // empty batch is passed through and counts zero.
    // ========================================================

    #[only_owner]
    #[endpoint(dispatch)]
    fn dispatch(&self, ids: MultiValueEncoded<u64>) {
        let ids = ids.to_vec();
        self.record_dispatch(&ids);
        self.executor_interact(&ids);
    }

    /// Counts the batch and logs it. The whole transaction reverts if the
    /// executor call that follows fails, counter included.
    fn record_dispatch(&self, ids: &ManagedVec<u64>) {
        let count = ids.len() as u64;
        let lifetime = match self.lifetime_pets().get().checked_add(count) {
            Some(total) => total,
            None => sc_panic!(ERR_PET_COUNTER_OVERFLOW),
        };
        self.lifetime_pets().set(lifetime);

        self.pet_dispatched_event(count, lifetime, ids);
    }

    #[view(getLifetimePets)]
    #[storage_mapper("lifetimePets")]
    fn lifetime_pets(&self) -> SingleValueMapper<u64>;
}
