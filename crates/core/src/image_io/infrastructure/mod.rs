pub mod data_uri;
pub mod image_file_reader;
pub mod image_file_writer;
pub mod raster_codec;
