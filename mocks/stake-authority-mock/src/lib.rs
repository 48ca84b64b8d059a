#![no_std]

multiversx_sc::imports!();

pub mod stake_authority_mock_proxy;

// ============================================================
// Stake Authority stand-in for scenario tests.
//
// Holds staked principal per caller and pays it back on withdraw.
// Frens are reported as the raw staked amount.
// ============================================================

#[multiversx_sc::contract]
pub trait StakeAuthorityMock {
    #[init]
    fn init(&self) {}

    #[payable("*")]
    #[endpoint(stakeGhst)]
    fn stake_ghst(&self, amount: BigUint) {
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_nonce == 0 && payment.amount == amount,
            "Payment does not match amount"
        );

        let caller = self.blockchain().get_caller();
        self.stake_token().set(&payment.token_identifier);
        self.staked(&caller).update(|staked| *staked += &amount);
    }

    #[endpoint(withdrawGhstStake)]
    fn withdraw_ghst_stake(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let staked = self.staked(&caller).get();
        require!(staked >= amount, "Insufficient stake");

        self.staked(&caller).set(&(staked - &amount));
        let token = self.stake_token().get();
        self.send().direct_esdt(&caller, &token, 0, &amount);
    }

    #[view(frens)]
    fn frens(&self, account: ManagedAddress) -> BigUint {
        self.staked(&account).get()
    }

    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getStaked)]
    #[storage_mapper("staked")]
    fn staked(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
