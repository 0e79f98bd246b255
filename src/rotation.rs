multiversx_sc::imports!();

use crate::errors::{ERR_ROTATION_NOT_ALLOWED, ERR_WRONG_DEPOSIT};

#[multiversx_sc::module]
pub trait RotationModule:
    crate::activation::ActivationModule
    + crate::bankroll::BankrollModule
    + crate::roles::RolesModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: becomeMaster
    // Anyone may take over the bankroll once it has been drained
    // below the capital requirement, by depositing exactly that amount.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(becomeMaster)]
    fn become_master(&self, candidate: OptionalValue<ManagedAddress>) {
        self.require_open();

        let candidate = self.address_or_caller(candidate);
        let deposit = self.call_value().egld_value().clone_value();
        let requirement = self.capital_requirement().get();

        require!(deposit == requirement, ERR_WRONG_DEPOSIT);
        require!(self.capacity() < requirement, ERR_ROTATION_NOT_ALLOWED);

        let previous_master = self.master().get();
        self.credit(&deposit);
        self.master().set(&candidate);

        self.master_changed_event(&previous_master, &candidate, &deposit);
    }

    #[view(getCapitalRequirement)]
    #[storage_mapper("capitalRequirement")]
    fn capital_requirement(&self) -> SingleValueMapper<BigUint>;
}
