pub mod encode_ops;
pub mod table_ops;
