fn main() {
    // Host builds (tests, simulation) need nothing from ESP-IDF.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
