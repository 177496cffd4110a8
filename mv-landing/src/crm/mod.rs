//! CRM domain: leads, tags, campaign attribution and the storage seam
//!
//! The contact intake flow only ever creates records; no update or
//! delete lifecycle exists here. Storage is behind the [`CrmStore`]
//! trait with a Postgres implementation for production and an
//! in-memory implementation for development and tests.

pub mod assemble;
pub mod attribution;
pub mod lead;
pub mod resolve;
pub mod store;
pub mod tag;
pub mod team;

pub use attribution::{UtmKind, UtmRecord};
pub use lead::{Lead, LeadKind, NewLead};
pub use resolve::{find_or_create_tag, find_or_create_utm, resolve_utm_links, UtmLinks};
pub use store::{CrmError, CrmStore, InMemoryCrmStore, PgCrmStore};
pub use tag::{Tag, LANDING_TAG};
pub use team::SalesTeam;
