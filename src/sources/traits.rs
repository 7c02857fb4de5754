use crate::errors::FeederResult;

#[cfg_attr(test, mockall::automock)]
pub trait PageSource: Send + Sync {
    /// Address of the page this source reads
    fn url(&self) -> String;

    /// Fetch the raw markup of the page
    fn fetch(&self) -> FeederResult<String>;
}
