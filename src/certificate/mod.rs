mod collection;
mod details;
mod record;
mod resolver;

pub use collection::{latest, search, unique_device_count};
pub use details::{CertificateDetails, NOT_AVAILABLE};
pub use record::{Certificate, is_truthy};
pub use resolver::{UNKNOWN, parse_timestamp};
