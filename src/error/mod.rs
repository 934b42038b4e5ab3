mod io;
mod launch;
mod parser;
mod resolve;
mod workspace;

pub use io::IoError;
pub use launch::LaunchError;
pub use parser::ParserError;
pub use resolve::ResolveError;
pub use workspace::WorkspaceError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

pub type Result<T> = std::result::Result<T, Error>;
