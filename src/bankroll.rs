multiversx_sc::imports!();

use crate::errors::ERR_INSUFFICIENT_RESERVE;

/// Owns the reserve. Outside of a running call the stored value equals the
/// contract's EGLD balance.
#[multiversx_sc::module]
pub trait BankrollModule {
    #[view(getCapacity)]
    fn capacity(&self) -> BigUint {
        self.reserve().get()
    }

    fn credit(&self, amount: &BigUint) {
        self.reserve().update(|reserve| *reserve += amount);
    }

    /// Must run before the matching outbound transfer.
    fn debit(&self, amount: &BigUint) {
        let reserve = self.reserve().get();
        require!(*amount <= reserve, ERR_INSUFFICIENT_RESERVE);
        self.reserve().set(reserve - amount);
    }

    #[storage_mapper("reserve")]
    fn reserve(&self) -> SingleValueMapper<BigUint>;
}
