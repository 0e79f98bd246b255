multiversx_sc::imports!();

use crate::errors::ERR_NOT_YET_OPEN;

/// Returns true once `now` has reached `activation_time`.
pub fn is_open(activation_time: u64, now: u64) -> bool {
    now >= activation_time
}

/// Time gate in front of every call that moves the reserve or the master.
#[multiversx_sc::module]
pub trait ActivationModule {
    #[view(isOpen)]
    fn is_open_now(&self) -> bool {
        is_open(
            self.activation_time().get(),
            self.blockchain().get_block_timestamp(),
        )
    }

    fn require_open(&self) {
        require!(self.is_open_now(), ERR_NOT_YET_OPEN);
    }

    #[view(getActivationTime)]
    #[storage_mapper("activationTime")]
    fn activation_time(&self) -> SingleValueMapper<u64>;
}
