fn main() {
    multiversx_sc_meta_lib::cli_main::<petting_pool::AbiProvider>();
}
