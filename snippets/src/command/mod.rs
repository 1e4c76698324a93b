use snippets_core::text::legacy::{strip_colors, to_component};

/// Anything that can receive chat messages.
pub trait CommandSender {
    fn name(&self) -> &str;

    /// `message` is expected to be colorized already.
    fn send_message(&self, message: &str);
}

/// The server console. Messages end up in the log.
pub struct ConsoleSender {
    color: bool,
}

impl ConsoleSender {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Turns section-sign codes into terminal colors, or drops them.
    pub fn render(&self, message: &str) -> String {
        if self.color {
            to_component(message).to_pretty_console()
        } else {
            strip_colors(message)
        }
    }
}

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn send_message(&self, message: &str) {
        log::info!("{}", self.render(message));
    }
}

#[cfg(test)]
mod test {
    use super::ConsoleSender;

    #[test]
    fn plain_console_strips_codes() {
        let console = ConsoleSender::new(false);
        assert_eq!(console.render("§7[§bTest§7] §x§F§F§0§0§0§0hi"), "[Test] hi");
    }

    #[test]
    fn color_console_keeps_text() {
        colored::control::set_override(false);
        let console = ConsoleSender::new(true);
        assert_eq!(console.render("§7[§bTest§7] hi"), "[Test] hi");
    }
}
