use log::Level;
use log::LevelFilter;
use log::Metadata;
use log::Record;
use wasm_bindgen::JsValue;

static LOGGER: Console = Console;

/// `log` sink writing to the browser devtools console.
#[derive(Debug, Clone, Copy)]
pub struct Console;

impl Console {
    /// Installs the logger. Later calls keep the first installation.
    pub fn install(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl log::Log for Console {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }
    fn flush(&self) {}
}
