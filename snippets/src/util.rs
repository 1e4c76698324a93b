use std::fmt;

use snippets_core::colorize;

use crate::{command::CommandSender, server::Server};

/// `prefix` followed by `message`, colorized as a whole.
pub fn format_message(prefix: &str, message: fmt::Arguments<'_>) -> String {
    colorize(&format!("{prefix}{message}"))
}

/// Sends a prefixed, colorized message to the console.
///
/// Usually called through [`plugin_log!`](crate::plugin_log).
pub fn log(server: &Server, message: fmt::Arguments<'_>) {
    server
        .console()
        .send_message(&format_message(&server.config().prefix, message));
}

/// Logs a formatted message to the server console behind the configured prefix.
///
/// ```no_run
/// # use snippets::{plugin_log, server::Server};
/// # let server = Server::new(Default::default());
/// plugin_log!(&server, "Loaded &a{}&7 menus", 3);
/// ```
#[macro_export]
macro_rules! plugin_log {
    ($server:expr, $($arg:tt)+) => {
        $crate::util::log($server, format_args!($($arg)+))
    };
}
