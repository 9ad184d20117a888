//! National ID checksum validation
//!
//! Only the check digits are verified; nothing is looked up.

pub mod brazilian;

pub use brazilian::{NationalId, validate_cnpj, validate_cpf};
