multiversx_sc::imports!();

use crate::{
    action_executor_proxy,
    config::TICKET_KINDS,
    stake_authority_proxy,
};

// ============================================================
// Ledger accessors
//
// Stake Authority and Action Executor are external contracts reached
// through typed proxies. The fungible and batch token ledgers are the
// protocol's native ESDT transfers.
// ============================================================

#[multiversx_sc::module]
pub trait LedgersModule: crate::config::ConfigModule {
    // ── Stake Authority ──

    fn authority_stake(&self, amount: &BigUint) {
        let authority = self.stake_authority_address().get();
        let token = self.stake_token().get();
        self.tx()
            .to(&authority)
            .typed(stake_authority_proxy::StakeAuthorityProxy)
            .stake_ghst(amount)
            .single_esdt(&token, 0, amount)
            .sync_call();
    }

    /// The authority pays the withdrawn amount back to this contract.
    fn authority_withdraw(&self, amount: &BigUint) {
        let authority = self.stake_authority_address().get();
        self.tx()
            .to(&authority)
            .typed(stake_authority_proxy::StakeAuthorityProxy)
            .withdraw_ghst_stake(amount)
            .sync_call();
    }

    fn authority_claim_tickets(&self, ids: &ManagedVec<u64>, values: &ManagedVec<BigUint>) {
        let authority = self.stake_authority_address().get();
        self.tx()
            .to(&authority)
            .typed(stake_authority_proxy::StakeAuthorityProxy)
            .claim_tickets(ids.clone(), values.clone())
            .sync_call();
    }

    fn authority_frens(&self, account: &ManagedAddress) -> BigUint {
        let authority = self.stake_authority_address().get();
        self.tx()
            .to(&authority)
            .typed(stake_authority_proxy::StakeAuthorityProxy)
            .frens(account)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ── Action Executor ──

    fn executor_interact(&self, ids: &ManagedVec<u64>) {
        let executor = self.action_executor_address().get();
        self.tx()
            .to(&executor)
            .typed(action_executor_proxy::ActionExecutorProxy)
            .interact(ids.clone())
            .sync_call();
    }

    /// Whether `account` lets this contract act on its tokens.
    fn executor_is_operator(&self, account: &ManagedAddress) -> bool {
        let executor = self.action_executor_address().get();
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&executor)
            .typed(action_executor_proxy::ActionExecutorProxy)
            .is_approved_for_all(account, own_address)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    // ── Fungible ledger ──

    fn send_stake_token(&self, to: &ManagedAddress, amount: &BigUint) {
        if *amount == 0u64 {
            return;
        }
        let token = self.stake_token().get();
        self.send().direct_esdt(to, &token, 0, amount);
    }

    fn stake_token_balance(&self) -> BigUint {
        let token = self.stake_token().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0)
    }

    // ── Batch (ticket) ledger ──

    /// Contract-held balance of every ticket kind, in kind order.
    fn ticket_balances(&self) -> ManagedVec<BigUint> {
        let token = EgldOrEsdtTokenIdentifier::esdt(self.ticket_token().get());
        let mut balances = ManagedVec::new();
        for kind in 1..=TICKET_KINDS {
            balances.push(self.blockchain().get_sc_balance(&token, kind));
        }
        balances
    }

    /// Forwards the batch as one multi-transfer; zero values are skipped.
    fn send_tickets(&self, to: &ManagedAddress, ids: &ManagedVec<u64>, values: &ManagedVec<BigUint>) {
        let token = self.ticket_token().get();
        let mut payments = ManagedVec::new();
        for (id, value) in ids.iter().zip(values.iter()) {
            if *value == 0u64 {
                continue;
            }
            payments.push(EsdtTokenPayment::new(token.clone(), id, value.clone_value()));
        }
        if payments.is_empty() {
            return;
        }
        self.send().direct_multi(to, &payments);
    }
}
