pub mod traits;
pub mod udn;

pub use traits::PageSource;
pub use udn::UdnSource;
