multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_MEMBER, ERR_NOT_A_MEMBER};

// ============================================================
// Membership registry
//
// `memberSlots` is a dense 1-based sequence; slot 0 does not exist
// and `memberIndex == 0` means "not a member". Removal moves the last
// member into the vacated slot, so enumeration order is not stable
// across removals.
// ============================================================

#[multiversx_sc::module]
pub trait MembershipModule: crate::events::EventsModule {
    fn add_member(&self, account: &ManagedAddress) {
        require!(self.member_index(account).get() == 0, ERR_ALREADY_MEMBER);

        let index = self.member_slots().push(account);
        self.member_index(account).set(index);

        self.member_added_event(account, index as u64);
    }

    fn remove_member(&self, account: &ManagedAddress) {
        let index = self.member_index(account).get();
        require!(index != 0, ERR_NOT_A_MEMBER);

        let mut slots = self.member_slots();
        let last = slots.len();
        if index != last {
            let relocated = slots.get(last);
            self.member_index(&relocated).set(index);
        }
        // Moves the tail into `index` (no-op when it already is the tail) and shrinks.
        slots.swap_remove(index);
        self.member_index(account).clear();

        self.member_removed_event(account, index as u64);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, account: &ManagedAddress) -> bool {
        self.member_index(account).get() != 0
    }

    /// Live members only. Order changes whenever a member leaves.
    #[view(getMembers)]
    fn get_members(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for member in self.member_slots().iter() {
            result.push(member);
        }
        result
    }

    #[view(getMembersPage)]
    fn get_members_page(&self, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let slots = self.member_slots();
        let total = slots.len() as u64;
        if from >= total {
            return result;
        }
        // Bounds stay in u64 until clamped to `total`; usize is 32 bits on wasm.
        let end = core::cmp::min(from.saturating_add(count), total);

        for index in (from + 1)..=end {
            result.push(slots.get(index as usize));
        }
        result
    }

    #[view(getMemberCount)]
    fn get_member_count(&self) -> usize {
        self.member_slots().len()
    }

    #[view(getMemberIndex)]
    #[storage_mapper("memberIndex")]
    fn member_index(&self, account: &ManagedAddress) -> SingleValueMapper<usize>;

    #[storage_mapper("memberSlots")]
    fn member_slots(&self) -> VecMapper<ManagedAddress>;
}
