use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("no element with id '{0}'")]
    NoSuchElement(String),

    #[error("element '{0}' has no click handler")]
    NotClickable(String),
}
