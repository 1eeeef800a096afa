use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building a hierarchy, declaring a
/// generic entity or running a compatibility query. A failed query never
/// corrupts the hierarchy or the declaration it ran against.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("type \"{0}\" is already registered")]
    DuplicateType(String),

    #[error("type \"{name}\" lists unknown supertype \"{supertype}\"")]
    UnknownSupertype { name: String, supertype: String },

    #[error("registering \"{name}\" would make the hierarchy cyclic: {}", .cycle.join(" -> "))]
    CyclicHierarchy { name: String, cycle: Vec<String> },

    #[error("declaration \"{declaration}\", slot {slot}: {reason}")]
    InvalidSlot {
        declaration: String,
        slot: usize,
        reason: String,
    },

    #[error("\"{declaration}\" expects {expected} type argument(s), but {given} given")]
    ArityMismatch {
        declaration: String,
        expected: usize,
        given: usize,
    },

    #[error("cannot compare \"{offered}\" with \"{required}\": different declarations")]
    DeclarationMismatch { required: String, offered: String },

    #[error("slot {slot} binds type \"{name}\" which is not registered")]
    UnknownType { slot: usize, name: String },
}
