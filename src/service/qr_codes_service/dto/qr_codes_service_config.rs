use std::path::PathBuf;

pub struct QrCodesServiceConfig {
    /// Public address of the server, verification links are built on top of it
    pub base_url: String,
    pub directory: PathBuf,
}
