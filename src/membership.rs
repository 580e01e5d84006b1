multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Member;
use crate::{events, storage, MEMBERSHIP_FEE};

#[multiversx_sc::module]
pub trait MembershipModule: storage::StorageModule + events::EventsModule {
    // ========================================================
    // ENDPOINT: join
    // Exact fee, one membership per address. The fee stays in
    // the contract balance, which is the treasury.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(join)]
    fn join(&self) {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();

        require!(payment == MEMBERSHIP_FEE, ERR_INVALID_PAYMENT);
        require!(!self.is_active_member(&caller), ERR_DUPLICATE_MEMBERSHIP);

        let joined_at = self.blockchain().get_block_timestamp();
        self.members(&caller).set(Member {
            active: true,
            joined_at,
        });
        self.member_count().update(|count| *count += 1);

        self.member_joined_event(&caller, joined_at, &payment);
    }

    // ========================================================
    // INTERNAL: eligibility predicates
    // ========================================================

    fn is_active_member(&self, address: &ManagedAddress) -> bool {
        let mapper = self.members(address);
        !mapper.is_empty() && mapper.get().active
    }

    /// Members who joined at or after `timestamp` are not eligible.
    fn is_active_before(&self, address: &ManagedAddress, timestamp: u64) -> bool {
        let mapper = self.members(address);
        if mapper.is_empty() {
            return false;
        }
        let member = mapper.get();
        member.active && member.joined_at < timestamp
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isMember)]
    fn is_member(&self, address: ManagedAddress) -> bool {
        self.is_active_member(&address)
    }

    #[view(getMember)]
    fn get_member(&self, address: ManagedAddress) -> Member {
        let mapper = self.members(&address);
        if mapper.is_empty() {
            Member::inactive()
        } else {
            mapper.get()
        }
    }
}
