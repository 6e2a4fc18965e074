//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter         | Implements | Connects to          |
//! |-----------------|------------|----------------------|
//! | `console`       | SignalSink | stdout (any `Write`) |
//! | `log_sink`      | SignalSink | `log` facade         |
//! | `settings_file` | ConfigPort | JSON file on disk    |

pub mod console;
pub mod log_sink;
pub mod settings_file;
