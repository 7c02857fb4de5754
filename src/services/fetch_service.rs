use crate::sources::PageSource;

/// Single-shot fetch that reduces every failure to `None`
pub struct FetchService<S: PageSource> {
    source: S,
}

impl<S: PageSource> FetchService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn url(&self) -> String {
        self.source.url()
    }

    /// Fetch the listing page once; the failure cause is only logged
    pub fn fetch(&self) -> Option<String> {
        let url = self.source.url();
        log::debug!("Fetching {}", url);

        match self.source.fetch() {
            Ok(body) => {
                log::debug!("Fetched {} bytes from {}", body.len(), url);
                Some(body)
            }
            Err(e) => {
                log::warn!("Fetch of {} failed: {}", url, e);
                None
            }
        }
    }
}
