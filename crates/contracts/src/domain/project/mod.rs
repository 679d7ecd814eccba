pub mod record;

pub use record::{Project, ProjectId, ProjectStatus};
