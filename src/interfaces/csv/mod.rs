pub mod ride_reader;
