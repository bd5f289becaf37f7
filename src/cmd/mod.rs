/// Native extraction command.
pub mod extract;
/// Kind listing command.
pub mod kinds;
/// Indirection resolution command.
pub mod origin;
pub(crate) mod util;
