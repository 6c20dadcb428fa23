mod result_converter;

pub use result_converter::ResultConverter;
