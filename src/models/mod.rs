pub mod connection;
pub mod inputs;
pub mod node;
pub mod project;
pub mod user;

// Re-export commonly used types
pub use connection::{Connection, Edge, PageInfo, ProjectConnection, UserConnection};
pub use inputs::{CreateProjectInput, PaginationInput, ProjectFilters, UpdateProjectInput};
pub use node::{resolve_type, Node, NodeType};
pub use project::{CompileSettings, DeletePayload, Project, ProjectPayload, ProjectSettings};
pub use user::User;
