multiversx_sc::imports!();

use crate::errors::ERR_INVALID_ADDRESS;

/// Two independent roles: `owner` is fixed at deployment and only ever
/// receives fees, `master` holds the bankroll and changes through rotation.
#[multiversx_sc::module]
pub trait RolesModule {
    /// Shares paid to the contract itself would never reach the reserve.
    fn require_valid_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
        require!(
            *address != self.blockchain().get_sc_address(),
            ERR_INVALID_ADDRESS
        );
    }

    /// Resolves an optional explicit address to the caller when absent.
    fn address_or_caller(&self, address: OptionalValue<ManagedAddress>) -> ManagedAddress {
        let resolved = match address {
            OptionalValue::Some(addr) => addr,
            OptionalValue::None => self.blockchain().get_caller(),
        };
        self.require_valid_address(&resolved);
        resolved
    }

    #[view(getOwner)]
    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getMaster)]
    #[storage_mapper("master")]
    fn master(&self) -> SingleValueMapper<ManagedAddress>;
}
