pub mod canara;
pub mod upi_text;
