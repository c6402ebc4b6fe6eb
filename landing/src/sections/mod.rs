// Info page sections

mod features;
mod getting_started;
mod header;
mod lists;

pub use features::Features;
pub use getting_started::GettingStarted;
pub use header::PageHeader;
pub use lists::CommandLists;
