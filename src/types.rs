multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Pot Split — outcome of resolving one wager
// ============================================================

/// Who receives which part of a pot depends on the branch:
///
/// | branch    | primary_share | secondary_share |
/// |-----------|---------------|-----------------|
/// | matched   | bettor        | master          |
/// | unmatched | master        | owner           |
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PotSplit<M: ManagedTypeApi> {
    pub matched: bool,
    pub pot: BigUint<M>,
    /// Taken out of the reserve. Always zero when unmatched.
    pub house_stake: BigUint<M>,
    pub primary_share: BigUint<M>,
    pub secondary_share: BigUint<M>,
}

// ============================================================
// Escrow Stats — running totals, informational only
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EscrowStats<M: ManagedTypeApi> {
    pub total_wagered: BigUint<M>,
    pub total_house_staked: BigUint<M>,
    pub matched_count: u64,
    pub unmatched_count: u64,
}
