pub mod repl;
pub mod run;
pub mod scenario;
pub mod status;
pub mod suggest;

pub use repl::*;
pub use run::*;
pub use scenario::*;
pub use status::*;
pub use suggest::*;
