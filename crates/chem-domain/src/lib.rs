// chem-domain library entry point
pub mod cid;
pub mod compound_record;
pub mod error;
pub mod lookup_input;
pub mod property_set;
pub mod status;
pub mod warning;
pub use cid::Cid;
pub use compound_record::{title_case, CompoundRecord};
pub use error::LookupError;
pub use lookup_input::{InputKind, LookupInput};
pub use property_set::{PropertyKey, PropertySet};
pub use status::{describe_status, is_success_status, StatusInfo};
pub use warning::Warning;
