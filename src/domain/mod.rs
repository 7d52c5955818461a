mod props;

pub use props::{FieldProps, InputType, Size, UnknownOption, Variant};
