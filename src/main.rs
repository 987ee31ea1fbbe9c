use connect_four_engine::protocol;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = protocol::run_loop() {
        log::error!("protocol loop failed: {e}");
        std::process::exit(1);
    }
}
