use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output of the crate to the test harness at debug level.
pub(crate) fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
            .is_test(true)
            .try_init();
    });
}

mod plot_test;
mod render_test;
