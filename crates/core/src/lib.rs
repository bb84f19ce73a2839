//! `stockdesk-core` — record model building blocks.
//!
//! This crate contains the **pure** data model shared by every collection:
//! identifiers, values, schemas, payloads and the error taxonomy. It performs
//! no IO.

pub mod clock;
pub mod error;
pub mod id;
pub mod record;
pub mod schema;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use id::{IdPolicy, RecordId};
pub use record::{Payload, Record};
pub use schema::{FieldKind, FieldSpec, RESERVED_FIELDS, Schema};
pub use value::{Money, Value};
