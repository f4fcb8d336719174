use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Initialize the logging system; the debug flag switches on per-document
/// detail
pub fn init_logging(debug: bool) {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(log_level)
        .init()
        .unwrap();
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
