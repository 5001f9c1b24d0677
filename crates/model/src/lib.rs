pub mod data_type;
pub mod jsonb;
pub mod value;

pub use data_type::DataType;
pub use jsonb::{Jsonb, jsonb};
pub use value::Value;
