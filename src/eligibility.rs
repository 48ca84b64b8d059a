multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EligibilityModule:
    crate::config::ConfigModule
    + crate::events::EventsModule
    + crate::membership::MembershipModule
    + crate::stake_accounting::StakeAccountingModule
    + crate::ledgers::LedgersModule
{
    /// Staked, registered, and currently approving this contract as operator
    /// on the Action Executor. Nothing is cached; the operator flag can be
    /// revoked outside this contract at any time.
    #[view(isEligible)]
    fn is_eligible(&self, account: &ManagedAddress) -> bool {
        self.has_full_stake(account) && self.executor_is_operator(account)
    }
}
