use std::fmt::Display;

use log::log;
use snippets_config::ConfigError;
use snippets_inventory::InventoryError;
use snippets_item::ItemError;

/// Errors the host reports to the console instead of passing further up.
pub trait SnippetsError: Send + std::error::Error + Display {
    fn log(&self) {
        log!(self.severity(), "{}", self.to_string());
    }

    fn severity(&self) -> log::Level;
}

impl<ErrorType: SnippetsError + 'static> From<ErrorType> for Box<dyn SnippetsError> {
    fn from(error: ErrorType) -> Self {
        Box::new(error)
    }
}

impl SnippetsError for InventoryError {
    fn severity(&self) -> log::Level {
        match self {
            InventoryError::InvalidSlot { .. }
            | InventoryError::InvalidRows(_)
            | InventoryError::NotCreatable(_) => log::Level::Error,
            // a client sending junk is not our bug
            InventoryError::ClosedContainerInteract(_) | InventoryError::InvalidPacket(_) => {
                log::Level::Warn
            }
        }
    }
}

impl SnippetsError for ItemError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

impl SnippetsError for ConfigError {
    fn severity(&self) -> log::Level {
        log::Level::Error
    }
}

#[cfg(test)]
mod test {
    use snippets_inventory::InventoryError;
    use snippets_item::ItemError;

    use super::SnippetsError;

    fn fails() -> Result<(), Box<dyn SnippetsError>> {
        Err(ItemError::AirMaterial.into())
    }

    #[test]
    fn boxed_errors_keep_their_severity() {
        let err = fails().unwrap_err();
        assert_eq!(err.severity(), log::Level::Error);

        let err: Box<dyn SnippetsError> = InventoryError::InvalidPacket("mode 9".into()).into();
        assert_eq!(err.severity(), log::Level::Warn);
    }
}
