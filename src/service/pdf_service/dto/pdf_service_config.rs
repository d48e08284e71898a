use std::path::PathBuf;

pub struct PdfServiceConfig {
    pub directory: PathBuf,
}
