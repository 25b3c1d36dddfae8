pub mod file;

use anyhow::Result;

use crate::record::RentalRecord;

/// Ordered collection of rental records with a single backing file.
///
/// Records keep insertion order and carry no uniqueness constraints; the same
/// renter may appear any number of times. Every mutating operation rewrites
/// the backing file before returning, so the file always reflects the
/// in-memory sequence. Not-found outcomes are normal results, never errors;
/// only I/O failures surface as `Err`.
pub trait RentalsRepository {
    /// Rewrites the backing file from the current sequence.
    fn save(&self) -> Result<()>;

    /// All records, in insertion order.
    fn list(&self) -> &[RentalRecord];

    /// Appends a record and persists the whole sequence.
    fn add(&mut self, record: RentalRecord) -> Result<()>;

    /// Every record whose renter name or phone model equals `value` exactly.
    fn find_by_exact(&self, value: &str) -> Vec<&RentalRecord>;

    /// Removes the first record whose renter name equals `name` exactly.
    /// Persists only when a record was removed; returns whether one was.
    fn delete_first_by_name(&mut self, name: &str) -> Result<bool>;

    /// A copy of the records ordered by renter name ascending, ties keeping
    /// their original relative order. The stored order is untouched.
    fn sorted_by_name(&self) -> Vec<RentalRecord>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
