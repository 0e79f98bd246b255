fn main() {
    multiversx_sc_meta_lib::cli_main::<match_escrow::AbiProvider>();
}
