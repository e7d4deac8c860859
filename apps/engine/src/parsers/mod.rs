// Per-section entity parsers. Each consumes one section body and emits zero
// or more structured items; sections that yield nothing are handled by the
// salvage auditor, never dropped here.

pub mod bullets;
pub mod certifications;
pub mod dates;
pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;
