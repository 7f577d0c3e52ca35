pub use docfold_config::Config;

pub mod check;
pub mod site;
