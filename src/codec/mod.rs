pub mod description;
pub mod identifier;
pub mod path;

pub use description::{module_id, parse_description};
pub use identifier::{decode, encode, encode_tokens, ModuleId};
pub use path::{Level, TopologyPath};
