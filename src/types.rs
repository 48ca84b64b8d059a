multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Member Info: snapshot of one account
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct MemberInfo<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    /// Registry slot, 0 when not a member
    pub index: u64,
    pub stake_balance: BigUint<M>,
    pub is_member: bool,
    pub is_staked: bool,
}
