use crate::error::InputError;
use crate::interfaces::RideRequest;
use std::io::Read;

/// Reads ride requests from a CSV source.
///
/// Expected header: `user, authenticated, distance_km, pricing, payment`.
/// Whitespace around fields is trimmed.
pub struct RideReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RideReader<R> {
    /// Creates a new `RideReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one request per row; a malformed row yields an
    /// error without stopping the stream.
    pub fn rides(self) -> impl Iterator<Item = Result<RideRequest, InputError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InputError::from))
    }
}
