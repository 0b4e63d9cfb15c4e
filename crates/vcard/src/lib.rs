// Contact record export - vCard 3.0 serialization and file download.
//
// The serialized payload is the one bit-exact boundary in the system:
// phone contact importers parse it, so field order, the parameter syntax
// and the stripped-digit phone format are frozen.

pub mod contact;
pub mod export;
pub mod vcf;

pub use contact::Contact;
pub use export::{trigger_download, write_vcf, ExportError};
pub use vcf::{file_name, generate};

/// MIME type of the exported payload.
pub const MIME_TYPE: &str = "text/vcard";
