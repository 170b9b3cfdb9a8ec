pub mod check;
pub mod dump;
pub mod generate;
pub mod print;


/// Failure while producing or persisting output units.
#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error(transparent)]
    Derive(#[from] hwvecgen_core::DeriveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
