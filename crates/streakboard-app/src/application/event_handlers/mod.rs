mod refresh_signal_handler;

pub use refresh_signal_handler::{RefreshSignal, RefreshSignalHandler};
