multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    /// `winner_or_master_share` goes to the bettor when matched, to the
    /// master otherwise; `house_or_owner_share` goes to the master when
    /// matched, to the owner otherwise.
    #[event("matchResolved")]
    fn match_resolved_event(
        &self,
        #[indexed] bettor: &ManagedAddress,
        #[indexed] wager: &BigUint,
        #[indexed] matched: bool,
        #[indexed] winner_or_master_share: &BigUint,
        house_or_owner_share: &BigUint,
    );

    #[event("masterChanged")]
    fn master_changed_event(
        &self,
        #[indexed] previous_master: &ManagedAddress,
        #[indexed] new_master: &ManagedAddress,
        deposit: &BigUint,
    );

    #[event("reserveFunded")]
    fn reserve_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);
}
