use multiversx_sc::proxy_imports::*;

pub struct StakeAuthorityProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for StakeAuthorityProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = StakeAuthorityProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        StakeAuthorityProxyMethods { wrapped_tx: tx }
    }
}

pub struct StakeAuthorityProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> StakeAuthorityProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: the staked amount must be attached as the stake token.
    pub fn stake_ghst<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("stakeGhst")
            .argument(&amount)
            .original_result()
    }

    pub fn withdraw_ghst_stake<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawGhstStake")
            .argument(&amount)
            .original_result()
    }

    pub fn claim_tickets<
        Arg0: ProxyArg<ManagedVec<Env::Api, u64>>,
        Arg1: ProxyArg<ManagedVec<Env::Api, BigUint<Env::Api>>>,
    >(
        self,
        ids: Arg0,
        values: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("claimTickets")
            .argument(&ids)
            .argument(&values)
            .original_result()
    }

    pub fn frens<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        account: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("frens")
            .argument(&account)
            .original_result()
    }
}
