#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("No placeholder resolver configured, cannot substitute {placeholder}")]
    MissingResolver { placeholder: String },
}
