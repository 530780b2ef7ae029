pub mod op_reader;
pub mod report_writer;
pub mod stock_reader;
