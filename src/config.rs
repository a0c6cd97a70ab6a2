use log::Level;

/// Third-party relay that forwards enquiry form submissions by email.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Access key for the relay, baked in at build time. Empty when unset.
pub fn relay_access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or("")
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
